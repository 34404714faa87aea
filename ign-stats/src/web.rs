mod api;
pub mod error;
mod handlers;
mod templates;

use std::{net::SocketAddr, sync::Arc};

use axum::{extract::FromRef, routing::get, Router};
use ign_dataset::DataLoader;
use tower_http::trace::TraceLayer;

use self::handlers::{misc, pages};

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) loader: Arc<DataLoader>,
}

impl FromRef<WebState> for Arc<DataLoader> {
    fn from_ref(input: &WebState) -> Self {
        input.loader.clone()
    }
}

pub(crate) fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/image", get(pages::image))
        .route("/about", get(pages::about))
        .route("/json-dataset", get(api::json_dataset))
        .route("/json-stats", get(api::json_stats))
        .route("/static/{*path}", get(misc::static_path))
        .fallback(misc::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState, port: u16) -> std::io::Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use ign_dataset::{
        loader::DATASET_KEY, record, DatasetSource, Game, ListStore, MemoryStore, NetworkError,
        ScorePhrase,
    };
    use tower::ServiceExt;

    use super::*;

    const CSV: &str = "\
title,score,score_phrase,platform,genre,release_year,release_month,release_day
God of War,10.0,Masterpiece,PlayStation 4,Action,2018,4,20
Halo 5,9.0,Amazing,Xbox One,Shooter,2015,10,27
Bloodborne,9.1,Amazing,PlayStation 4,Action RPG,2015,3,24
";

    #[derive(Default)]
    struct StubSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DatasetSource for StubSource {
        async fn fetch(&self) -> Result<Vec<u8>, NetworkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CSV.as_bytes().to_vec())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DatasetSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<u8>, NetworkError> {
            Err(url::Url::parse("relative/path").unwrap_err().into())
        }
    }

    fn app(source: Arc<dyn DatasetSource>, store: Arc<MemoryStore>) -> Router {
        let loader = DataLoader::new(store, source, std::env::temp_dir());
        router(WebState {
            loader: Arc::new(loader),
        })
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn warm_store(games: &[Game]) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::default());
        for game in games {
            store
                .push(DATASET_KEY, record::encode(game).unwrap())
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_json_stats_from_cold_cache() {
        let source = Arc::new(StubSource::default());
        let store = Arc::new(MemoryStore::default());
        let (status, content_type, body) =
            get_body(app(source.clone(), store.clone()), "/json-stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert!(body.starts_with(r#"{"Masterpiece":1,"Amazing":1,"Great":0,"#));
        assert!(body.ends_with(r#""Unbearable":0}"#));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.entry_count(DATASET_KEY).await, 3);
    }

    #[tokio::test]
    async fn test_json_dataset_from_warm_cache() {
        let game = Game {
            title: "Journey".to_string(),
            score: 9.0,
            score_phrase: ScorePhrase::Amazing,
            platform: "PlayStation 3".to_string(),
            genre: "Adventure".to_string(),
            release_year: 2012,
            release_month: 3,
            release_day: 13,
        };
        let source = Arc::new(StubSource::default());
        let store = warm_store(&[game.clone()]).await;
        let (status, _, body) = get_body(app(source.clone(), store), "/json-dataset").await;
        assert_eq!(status, StatusCode::OK);
        let games: Vec<Game> = serde_json::from_str(&body).unwrap();
        assert_eq!(games, vec![game]);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_home_page_lists_counts() {
        let store = warm_store(&[Game {
            title: "Gravity Rush".to_string(),
            score: 8.0,
            score_phrase: ScorePhrase::Great,
            platform: "PlayStation Vita".to_string(),
            genre: "Action".to_string(),
            release_year: 2012,
            release_month: 6,
            release_day: 12,
        }])
        .await;
        let (status, content_type, body) =
            get_body(app(Arc::new(StubSource::default()), store), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains(r#"<img src="/image""#));
        assert!(body.contains(r#"<td class="count">1</td>"#));
        for phrase in ScorePhrase::ALL {
            assert!(body.contains(&format!("<td>{phrase}</td>")));
        }
        let masterpiece = body.find("<td>Masterpiece</td>").unwrap();
        let unbearable = body.find("<td>Unbearable</td>").unwrap();
        assert!(masterpiece < unbearable);
    }

    #[tokio::test]
    async fn test_image_is_scalable_svg() {
        let source = Arc::new(StubSource::default());
        let (status, content_type, body) =
            get_body(app(source.clone(), Arc::default()), "/image").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        let root_start = body.find("<svg").unwrap();
        let root = &body[root_start..root_start + body[root_start..].find('>').unwrap()];
        assert!(root.starts_with(r#"<svg width="100%""#));
        assert!(!root.contains("height="));
        assert!(body.contains(r#"transform="rotate(45, "#));
        assert!(body.contains(">Masterpiece</text>"));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_about_page_needs_no_data() {
        let (status, _, body) =
            get_body(app(Arc::new(FailingSource), Arc::default()), "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>About</h1>"));
    }

    #[tokio::test]
    async fn test_network_failure_is_server_error() {
        let (status, _, body) =
            get_body(app(Arc::new(FailingSource), Arc::default()), "/json-stats").await;
        assert!(status.is_server_error());
        assert!(body.contains("Failed to fetch dataset"));
    }

    #[tokio::test]
    async fn test_static_files() {
        let (status, content_type, _) = get_body(
            app(Arc::new(FailingSource), Arc::default()),
            "/static/main.css",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/css"));

        let (status, _, _) = get_body(
            app(Arc::new(FailingSource), Arc::default()),
            "/static/missing.css",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, body) =
            get_body(app(Arc::new(FailingSource), Arc::default()), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not found");
    }
}
