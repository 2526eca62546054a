use thiserror::Error;

/// Errors that can occur while loading data or generating the site
#[derive(Error, Debug)]
pub enum SiteError {
    /// Failed to fetch the data file over HTTP
    #[error("Failed to fetch data file: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Data file request answered with a non-success status
    #[error("Data file request to {url} returned status {status}")]
    Status { status: u16, url: String },

    /// Failed to read or write a local file
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file is not valid JSON for the expected shape
    #[error("Failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Preview server failed to bind or start
    #[error("Serve error: {0}")]
    Serve(String),
}
