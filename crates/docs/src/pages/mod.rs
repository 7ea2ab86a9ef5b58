// File: crates/docs/src/pages/mod.rs
// Summary: Page registry and route resolution for the docs site.

use dioxus::prelude::*;

pub mod examples;
pub mod home;

/// One entry of the docs navigation.
#[derive(Clone, Copy)]
pub struct Page {
    pub label: &'static str,
    /// Path without leading or trailing slashes; `""` is the site root.
    pub route: &'static str,
    pub order: u32,
    /// Exact pages match only their own route; others also match any sub-path.
    pub exact: bool,
    pub component: fn() -> Element,
}

impl PartialEq for Page {
    fn eq(&self, other: &Self) -> bool { self.route == other.route }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("label", &self.label)
            .field("route", &self.route)
            .field("order", &self.order)
            .field("exact", &self.exact)
            .finish()
    }
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

impl Page {
    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);
        let route = normalize(self.route);
        if self.exact || path == route {
            return path == route;
        }
        route.is_empty() || path.strip_prefix(route).is_some_and(|rest| rest.starts_with('/'))
    }

    /// File the page is exported to, relative to the site root.
    pub fn file_name(&self) -> String {
        match normalize(self.route) {
            "" => "index.html".to_string(),
            route => format!("{route}.html"),
        }
    }

    /// Number of directories between the site root and this page's file.
    pub fn depth(&self) -> usize {
        normalize(self.route).matches('/').count()
    }

    /// Relative link to this page from a page `from_depth` directories deep.
    pub fn href(&self, from_depth: usize) -> String {
        format!("{}{}", "../".repeat(from_depth), self.file_name())
    }
}

/// All pages, sorted by `order`.
pub fn pages() -> Vec<Page> {
    let mut all = vec![
        home::PAGE,
        examples::GALLERY,
        examples::LINE,
        examples::SIMPLE_AREA,
        examples::BAR,
        examples::SCATTER,
        examples::PIE,
    ];
    all.sort_by_key(|p| p.order);
    all
}

/// Page for `path`: an exact route match first, else the longest matching prefix route.
pub fn resolve_route(path: &str) -> Option<Page> {
    let all = pages();
    let path = normalize(path);
    if let Some(page) = all.iter().find(|p| normalize(p.route) == path) {
        return Some(*page);
    }
    all.into_iter()
        .filter(|p| p.matches(path))
        .max_by_key(|p| normalize(p.route).len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_unique() {
        let all = pages();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| b.route != a.route), "duplicate route {}", a.route);
        }
    }

    #[test]
    fn hrefs_climb_out_of_nested_pages() {
        assert_eq!(examples::LINE.file_name(), "examples/line.html");
        assert_eq!(examples::LINE.depth(), 1);
        assert_eq!(home::PAGE.href(examples::LINE.depth()), "../index.html");
        assert_eq!(examples::LINE.href(0), "examples/line.html");
    }
}
