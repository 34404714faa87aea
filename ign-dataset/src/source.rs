use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::info;

use crate::error::NetworkError;

pub const IGN_DATASET_URL: &str = "https://onu1.s2.chalmers.se/datasets/IGN_games.csv";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Where the raw CSV comes from on a cache miss
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, NetworkError>;
}

pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .user_agent(concat!("ign-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: Url::parse(url)?,
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, NetworkError> {
        info!("Downloading dataset: {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        info!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}
