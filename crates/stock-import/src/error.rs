use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The header row lacks required columns. Carries exactly the missing
    /// names, in required-column order; no rows are produced.
    #[error("missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The stream is not valid CSV.
    #[error("failed to parse CSV file: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
