use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the chart from being shown.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The benchmark file could not be opened.
    #[error("Could not open benchmark file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The benchmark file is not valid CSV, or a field has the wrong type.
    #[error("Could not properly load benchmark CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A column the chart needs is absent from the header row.
    #[error("Benchmark file has no '{0}' column")]
    MissingColumn(String),

    /// The windowing platform refused to open the chart.
    #[error("Could not open chart window: {0}")]
    Display(String),
}
