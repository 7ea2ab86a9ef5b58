// File: crates/chart-core/src/error.rs
// Summary: Library error type shared by translation and dataset loading.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart options carry no `type` discriminant")]
    MissingType,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
