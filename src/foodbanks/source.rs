use crate::cli::{Args, SourceKind};
use crate::foodbanks::errors::LoadError;
use crate::foodbanks::models::FoodBankRecord;
use crate::foodbanks::normalize;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[async_trait]
pub trait FoodBankSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FoodBankRecord>, LoadError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

pub fn from_args(args: &Args) -> Box<dyn FoodBankSource> {
    match args.source {
        SourceKind::Remote => Box::new(GiveFoodApiSource::new(
            args.api_url.clone(),
            Duration::from_secs(args.fetch_timeout_secs),
        )),
        SourceKind::Local => Box::new(LocalFileSource::new(args.local_path.clone())),
    }
}

/// The live Give Food directory.
pub struct GiveFoodApiSource {
    url: Url,
    http_client: Client,
}

impl GiveFoodApiSource {
    pub fn new(url: Url, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Falling back to an HTTP client without a timeout.");
                Client::new()
            });
        Self { url, http_client }
    }

    fn request_error(&self, source: reqwest::Error) -> LoadError {
        LoadError::Request {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl FoodBankSource for GiveFoodApiSource {
    async fn fetch(&self) -> Result<Vec<FoodBankRecord>, LoadError> {
        let body = self
            .http_client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| self.request_error(err))?
            .bytes()
            .await
            .map_err(|err| self.request_error(err))?;
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&body)?;
        Ok(normalize::normalize_give_food(entries))
    }

    fn describe(&self) -> String {
        format!("remote {}", self.url)
    }
}

/// A JSON file already in record shape.
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FoodBankSource for LocalFileSource {
    async fn fetch(&self) -> Result<Vec<FoodBankRecord>, LoadError> {
        let contents = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&contents)?;
        Ok(normalize::normalize_local(entries))
    }

    fn describe(&self) -> String {
        format!("local {}", self.path.display())
    }
}
