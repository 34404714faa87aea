use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use ign_dataset::{aggregate, DataLoader};

use crate::web::{
    error::WebError,
    templates::{
        page::RenderPage,
        pages::{about_page::AboutPage, home_page::HomePage},
    },
};

pub(crate) async fn home(
    State(loader): State<Arc<DataLoader>>,
) -> Result<RenderPage<HomePage>, WebError> {
    let dataset = loader.load_dataset().await?;
    let stats = aggregate(&dataset);
    Ok(RenderPage(HomePage { stats }))
}

pub(crate) async fn image(
    State(loader): State<Arc<DataLoader>>,
) -> Result<impl IntoResponse, WebError> {
    let dataset = loader.load_dataset().await?;
    let stats = aggregate(&dataset);
    // plotting is cpu bound, keep it off the async workers
    let figure = tokio::task::spawn_blocking(move || ign_charts::render_chart(&stats)).await??;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], figure))
}

pub(crate) async fn about() -> RenderPage<AboutPage> {
    RenderPage(AboutPage)
}
