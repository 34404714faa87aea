use std::{path::PathBuf, sync::Arc};

use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::{
    error::DatasetError, game::Game, parse::read_games, record, source::DatasetSource,
    store::ListStore,
};

/// Key of the list holding one encoded record per game
pub const DATASET_KEY: &str = "dataset_list";
pub const CSV_FILE_NAME: &str = "IGN_games.csv";

/// Loads the IGN dataset, serving it from the list store when it has already been downloaded.
pub struct DataLoader {
    store: Arc<dyn ListStore>,
    source: Arc<dyn DatasetSource>,
    data_dir: PathBuf,
    // readers share the lock, populating the store takes it exclusively
    populate: RwLock<()>,
}

impl DataLoader {
    pub fn new(
        store: Arc<dyn ListStore>,
        source: Arc<dyn DatasetSource>,
        data_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            source,
            data_dir: data_dir.into(),
            populate: RwLock::new(()),
        }
    }

    #[instrument(skip(self))]
    pub async fn load_dataset(&self) -> Result<Vec<Game>, DatasetError> {
        {
            let _read = self.populate.read().await;
            if let Some(games) = self.read_cached().await? {
                return Ok(games);
            }
        }
        let _write = self.populate.write().await;
        // someone else may have filled the store while we waited for the lock
        if let Some(games) = self.read_cached().await? {
            return Ok(games);
        }
        self.download_and_store().await
    }

    async fn read_cached(&self) -> Result<Option<Vec<Game>>, DatasetError> {
        if !self.store.exists(DATASET_KEY).await? {
            return Ok(None);
        }
        info!("Dataset already downloaded.");
        let games = self
            .store
            .range_all(DATASET_KEY)
            .await?
            .iter()
            .map(|entry| record::decode(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(games))
    }

    async fn download_and_store(&self) -> Result<Vec<Game>, DatasetError> {
        let body = self.source.fetch().await?;
        let path = self.data_dir.join(CSV_FILE_NAME);
        tokio::fs::write(&path, &body).await?;
        info!("Saved dataset to {}", path.display());

        let games = read_games(body.as_slice())?;
        let records = games
            .iter()
            .map(record::encode)
            .collect::<Result<Vec<_>, _>>()?;
        // one write, so a failure part way can never leave a truncated list behind
        self.store.push_all(DATASET_KEY, records).await?;
        info!("Stored {} games", games.len());
        Ok(games)
    }
}
