mod config;
mod web;

use std::sync::Arc;

use anyhow::Result;
use ign_dataset::{DataLoader, HttpSource, ListStore, MemoryStore, RedisStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::web::WebState;

async fn init_store(config: &Config) -> Result<Arc<dyn ListStore>> {
    Ok(match &config.redis_url {
        Some(url) => Arc::new(RedisStore::connect(url).await?),
        None => {
            warn!("REDIS_URL not set, the dataset will only be cached in memory");
            Arc::new(MemoryStore::default())
        }
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let config = Config::from_env()?;
    info!("starting with {config:?}");
    let store = init_store(&config).await?;
    let source = HttpSource::new(&config.dataset_url, config.fetch_timeout)?;
    let loader = DataLoader::new(store, Arc::new(source), config.data_dir.clone());
    let web_state = WebState {
        loader: Arc::new(loader),
    };
    web::start_web(web_state, config.port).await?;
    Ok(())
}
