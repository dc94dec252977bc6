//! Where menu collections come from.

use std::path::PathBuf;

use reqwest::Client;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::MenuRecord;

/// Path of the menus endpoint, relative to the API base URL.
pub const MENUS_PATH: &str = "/api/menus";

/// HTTP client bound to a menu API base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full endpoint URL, with `?force` when the server should skip its cache.
    pub fn menus_url(&self, force_refresh: bool) -> String {
        let mut url = format!("{}{}", self.base_url, MENUS_PATH);
        if force_refresh {
            url.push_str("?force");
        }
        url
    }

    async fn load(&self, force_refresh: bool) -> Result<Vec<MenuRecord>, AppError> {
        let url = self.menus_url(force_refresh);
        tracing::debug!("GET {}", url);

        let records = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MenuRecord>>()
            .await?;

        Ok(records)
    }
}

/// Origin of the menu collection.
#[derive(Debug, Clone)]
pub enum MenuSource {
    /// The `/api/menus` endpoint
    Http(HttpSource),
    /// A local JSON file holding the same payload
    File(PathBuf),
}

impl MenuSource {
    /// Build the source described by the configuration.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        if let Some(path) = &config.offline_file {
            return Ok(MenuSource::File(path.clone()));
        }

        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(MenuSource::Http(HttpSource::new(client, &config.api_url)))
    }

    /// Load the full collection. File sources ignore `force_refresh`.
    pub async fn load(&self, force_refresh: bool) -> Result<Vec<MenuRecord>, AppError> {
        match self {
            MenuSource::Http(http) => http.load(force_refresh).await,
            MenuSource::File(path) => {
                let raw = tokio::fs::read_to_string(path).await?;
                Ok(serde_json::from_str(&raw)?)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MenuSource::Http(http) => http.menus_url(false),
            MenuSource::File(path) => path.display().to_string(),
        }
    }
}
