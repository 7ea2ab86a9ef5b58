// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark palettes applied as option defaults (series colors and background).

use serde_json::json;

use crate::options::ChartOptions;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub palette: &'static [&'static str],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            text: "#ebebf5",
            palette: &["#40a0ff", "#28c878", "#dc5050", "#ffe646", "#609cff", "#b4b4be"],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            text: "#14141e",
            palette: &["#2078c8", "#14a05a", "#c83c3c", "#e6a800", "#2878c8", "#3c3c46"],
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: "#002b36", // base03
            text: "#eee8d5",       // base2
            palette: &["#268bd2", "#2aa198", "#dc322f", "#b58900", "#6c71c4", "#cb4b16"],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: "#fdf6e3", // base3
            text: "#002b36",       // base03
            palette: &["#268bd2", "#2aa198", "#dc322f", "#b58900", "#6c71c4", "#cb4b16"],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: "#000000",
            text: "#ffffff",
            palette: &["#00ffff", "#00ff00", "#ff0000", "#ffff00", "#00aaff", "#ffffff"],
        }
    }

    /// Theme colors as mergeable defaults; caller colors still win.
    pub fn as_defaults(&self) -> ChartOptions {
        ChartOptions::new()
            .with_color(self.palette.iter().copied())
            .with_background(self.background)
            .with_extra("textStyle", json!({ "color": self.text }))
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_dark_fallback() {
        assert_eq!(find("Solarized-Light").name, "solarized-light");
        assert_eq!(find("nope").name, "dark");
    }

    #[test]
    fn defaults_carry_palette_and_background() {
        let d = Theme::light().as_defaults();
        assert_eq!(d.background_color.as_deref(), Some("#fafafc"));
        assert_eq!(d.color.map(|c| c.len()), Some(6));
        assert_eq!(d.kind, None);
    }
}
