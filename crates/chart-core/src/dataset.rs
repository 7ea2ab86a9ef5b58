// File: crates/chart-core/src/dataset.rs
// Summary: Tabular datasets loaded from CSV: first column holds category labels, every
// further column is a numeric series named by its header.

use std::io::Read;
use std::path::Path;

use crate::axis::Axis;
use crate::error::{ChartError, ChartResult};
use crate::options::{ChartOptions, Legend};
use crate::series::{DataPoint, Series};

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub categories: Vec<String>,
    pub columns: Vec<Column>,
}

impl Dataset {
    pub fn from_csv_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| ChartError::InvalidData(format!("opening {}: {e}", path.as_ref().display())))?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_str(input: &str) -> ChartResult<Self> {
        Self::from_csv_reader(input.as_bytes())
    }

    /// Empty cells become gaps; any other non-numeric or non-finite cell is an error naming
    /// its row and column.
    pub fn from_csv_reader<R: Read>(reader: R) -> ChartResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
        if headers.is_empty() {
            return Err(ChartError::InvalidData("csv has no header row".to_string()));
        }

        let mut columns = headers[1..]
            .iter()
            .map(|name| Column { name: name.clone(), values: Vec::new() })
            .collect::<Vec<_>>();
        let mut categories = Vec::new();

        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            categories.push(rec.get(0).unwrap_or_default().to_string());
            for (ci, column) in columns.iter_mut().enumerate() {
                let cell = rec.get(ci + 1).unwrap_or_default();
                let value = if cell.is_empty() {
                    None
                } else {
                    let parsed = cell.parse::<f64>().ok().filter(|v| v.is_finite());
                    Some(parsed.ok_or_else(|| {
                        ChartError::InvalidData(format!(
                            "row {}, column '{}': '{cell}' is not a finite number",
                            row + 1,
                            column.name
                        ))
                    })?)
                };
                column.values.push(value);
            }
        }

        tracing::debug!(rows = categories.len(), columns = columns.len(), "loaded csv dataset");
        Ok(Self { categories, columns })
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Category X axis, one series per column and matching legend entries.
    pub fn to_options(&self) -> ChartOptions {
        let mut opts = ChartOptions::new()
            .with_x_axis(Axis::category().with_categories(self.categories.iter().cloned()))
            .with_legend(Legend {
                data: Some(self.columns.iter().map(|c| c.name.clone()).collect()),
                ..Legend::default()
            });
        for column in &self.columns {
            opts = opts.add_series(Series::new(column.name.clone()).with_data(column.values.iter().copied()));
        }
        opts
    }

    /// Named items of one column, for pie slices. Gaps are skipped.
    pub fn to_items(&self, column: &str) -> ChartResult<Vec<DataPoint>> {
        let col = self
            .column(column)
            .ok_or_else(|| ChartError::InvalidData(format!("no column named '{column}'")))?;
        Ok(self
            .categories
            .iter()
            .zip(&col.values)
            .filter_map(|(name, v)| v.map(|value| DataPoint::Item { name: name.clone(), value }))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "month, a, b\nJan, 1.5, 2\nFeb, , 3\n";

    #[test]
    fn loads_categories_and_gaps() {
        let ds = Dataset::from_csv_str(CSV).unwrap();
        assert_eq!(ds.categories, vec!["Jan", "Feb"]);
        assert_eq!(ds.column("a").unwrap().values, vec![Some(1.5), None]);
        assert_eq!(ds.column("b").unwrap().values, vec![Some(2.0), Some(3.0)]);
    }

    #[test]
    fn bad_cell_names_row_and_column() {
        let err = Dataset::from_csv_str("m,a\nJan,x\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 1"), "{msg}");
        assert!(msg.contains("'a'"), "{msg}");
    }

    #[test]
    fn non_finite_cells_are_rejected() {
        for cell in ["NaN", "inf", "-infinity"] {
            let err = Dataset::from_csv_str(&format!("m,a\nJan,1\nFeb,{cell}\n")).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("row 2"), "{msg}");
            assert!(msg.contains(cell), "{msg}");
        }
    }

    #[test]
    fn items_skip_gaps() {
        let ds = Dataset::from_csv_str(CSV).unwrap();
        let items = ds.to_items("a").unwrap();
        assert_eq!(items, vec![DataPoint::Item { name: "Jan".into(), value: 1.5 }]);
        assert!(ds.to_items("zzz").is_err());
    }
}
