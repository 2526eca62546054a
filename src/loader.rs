//! Loads the product/recipe data file from disk or over HTTP.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::error::SiteError;
use crate::model::Dataset;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the data file comes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Read the data file from the local filesystem
    Path(PathBuf),
    /// Fetch the data file over HTTP(S)
    Url(String),
}

impl DataSource {
    /// Detects the source kind from a configuration string: anything with an
    /// `http://` or `https://` prefix is fetched, everything else is a path.
    pub fn detect(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Url(value.to_string())
        } else {
            DataSource::Path(PathBuf::from(value))
        }
    }

    /// Loads and parses the data file. An HTTP source answering with a
    /// non-success status fails with [`SiteError::Status`]; malformed
    /// content surfaces as [`SiteError::Parse`].
    pub fn load(&self) -> Result<Dataset, SiteError> {
        let body = match self {
            DataSource::Path(path) => {
                debug!("reading data file {}", path.display());
                fs::read_to_string(path)?
            }
            DataSource::Url(url) => fetch(url)?,
        };
        let dataset: Dataset = serde_json::from_str(&body)?;
        Ok(dataset)
    }
}

fn fetch(url: &str) -> Result<String, SiteError> {
    debug!("fetching data file from {url}");
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent("Mozilla/5.0 (compatible; SaporiSite/0.3)")
        .build()?;
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(SiteError::Status {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_url() {
        assert!(matches!(
            DataSource::detect("https://example.com/data/products.json"),
            DataSource::Url(_)
        ));
        assert!(matches!(
            DataSource::detect("http://localhost:9000/products.json"),
            DataSource::Url(_)
        ));
    }

    #[test]
    fn test_detect_path() {
        assert!(matches!(
            DataSource::detect("data/products.json"),
            DataSource::Path(_)
        ));
        assert!(matches!(
            DataSource::detect("/srv/site/products.json"),
            DataSource::Path(_)
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let source = DataSource::Path(PathBuf::from("no-such-directory/products.json"));
        assert!(matches!(source.load(), Err(SiteError::Io(_))));
    }
}
