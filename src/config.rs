use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Site configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SiteConfig {
    /// Path or http(s) URL of the products data file
    pub data_source: String,
    /// Directory the static build writes into
    pub output_dir: String,
    /// Public base URL prefix for internal links (empty for site-root)
    pub base_url: String,
    /// Site title shown in the page header
    pub title: String,
    /// Tagline shown under the title
    pub tagline: String,
    /// Stylesheet links shared by every page and duplicated by print pages
    pub stylesheets: Vec<String>,
    /// Listen address of the preview server
    pub serve_addr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            output_dir: default_output_dir(),
            base_url: String::new(),
            title: default_title(),
            tagline: default_tagline(),
            stylesheets: default_stylesheets(),
            serve_addr: default_serve_addr(),
        }
    }
}

// Default value functions
fn default_data_source() -> String {
    "data/products.json".to_string()
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn default_title() -> String {
    "Sapori".to_string()
}

fn default_tagline() -> String {
    "Prodotti e ricette della tradizione".to_string()
}

fn default_stylesheets() -> Vec<String> {
    vec!["/assets/site.css".to_string()]
}

fn default_serve_addr() -> String {
    "127.0.0.1:7878".to_string()
}

impl SiteConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with SAPORI__ prefix
    /// 2. site.toml file in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: SAPORI__DATA_SOURCE, SAPORI__SERVE_ADDR
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("site").required(false))
            .add_source(
                Environment::with_prefix("SAPORI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Joins a site-relative path onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
