use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ign_dataset::DatasetError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Error loading the dataset {0}")]
    Dataset(#[from] DatasetError),
    #[error("Error drawing chart {0}")]
    Chart(#[from] anyhow::Error),
    #[error("Background task failed {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::Dataset(DatasetError::Network(_)) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Error returned {self:?}");
        (self.as_status_code(), format!("{self}")).into_response()
    }
}
