use std::sync::Arc;

use axum::{extract::State, Json};
use ign_dataset::{aggregate, DataLoader, Game, ScoreStats};

use super::error::WebError;

pub(crate) async fn json_dataset(
    State(loader): State<Arc<DataLoader>>,
) -> Result<Json<Vec<Game>>, WebError> {
    Ok(Json(loader.load_dataset().await?))
}

pub(crate) async fn json_stats(
    State(loader): State<Arc<DataLoader>>,
) -> Result<Json<ScoreStats>, WebError> {
    let dataset = loader.load_dataset().await?;
    Ok(Json(aggregate(&dataset)))
}
