//! HTTP server for reelgrid
//!
//! Routes:
//! - `GET /` - video grid page
//! - `GET /gifs` - animation gallery page
//! - `GET /api/videos?dirPath=<dir>` - video files of a directory, newest first
//! - `GET /api/stream?path=<file>` - file bytes, honoring `Range`
//! - `GET /api/gifs` - animation names of the configured directory
//! - `GET /animations/<file>` - static animation files

pub mod handlers;
pub mod pages;

use crate::{
    config::{Config, USER_AGENT},
    error::{Error, Result},
    utils::{get_local_ip, parse_socket_addr},
};
use axum::{Router, routing::get};
use http::{HeaderValue, header::SERVER};
use log::{debug, info, warn};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Wraps `config` for sharing between handlers
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    let animations = ServeDir::new(&state.config.animations_dir);

    Router::new()
        .route("/", get(pages::video_grid))
        .route("/gifs", get(pages::gallery))
        .route("/api/videos", get(handlers::list_videos))
        .route("/api/stream", get(handlers::stream_video))
        .route("/api/gifs", get(handlers::list_gifs))
        .nest_service("/animations", animations)
        .layer(SetResponseHeaderLayer::overriding(
            SERVER,
            HeaderValue::from_static(USER_AGENT),
        ))
        .with_state(state)
}

/// The video grid HTTP server
#[derive(Debug, Clone)]
pub struct GridServer {
    state: AppState,
    server_addr: SocketAddr,
}

impl GridServer {
    /// Create a new server from `config`
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let server_addr = parse_socket_addr(&config.host, config.port)?;
        debug!("Server address: {server_addr}");

        Ok(Self {
            state: AppState::new(config),
            server_addr,
        })
    }

    /// Gets the server address
    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Binds the listener and serves until Ctrl-C is received.
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.server_addr)
            .await
            .map_err(|e| Error::ServerError {
                source: e,
                context: format!("Failed to bind {}", self.server_addr),
            })?;

        info!("Serving on http://{}", self.server_addr);
        if self.server_addr.ip().is_unspecified() {
            match get_local_ip() {
                Ok(ip) => info!("Reachable at http://{ip}:{}", self.server_addr.port()),
                Err(e) => debug!("{e}"),
            }
        }
        info!(
            "Animations directory: {}",
            self.state.config.animations_dir.display()
        );

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::ServerError {
                source: e,
                context: "Server stopped unexpectedly".to_string(),
            })
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STREAM_CONTENT_TYPE;
    use axum::{body::Body, response::Response};
    use http::{
        Request, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE},
    };
    use serde_json::Value;
    use std::{fs::File, path::Path, time::Duration, time::SystemTime};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app(animations_dir: &Path) -> Router {
        router(AppState::new(
            Config::new().with_animations_dir(animations_dir),
        ))
    }

    async fn send(app: Router, uri: &str, range: Option<&str>) -> Response {
        let mut request = Request::builder().uri(uri);
        if let Some(range) = range {
            request = request.header("Range", range);
        }
        app.oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn touch(dir: &Path, name: &str, modified_at: SystemTime) {
        File::create(dir.join(name))
            .unwrap()
            .set_modified(modified_at)
            .unwrap();
    }

    #[test]
    fn test_grid_server_rejects_bad_address() {
        let result = GridServer::new(Config::new().with_host("not a host"));
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_server_rejects_zero_interval() {
        let result = GridServer::new(Config::new().with_poll_interval(0));
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_grid_server_address() {
        let server = GridServer::new(Config::new().with_host("127.0.0.1").with_port(8123)).unwrap();
        assert_eq!(server.server_addr().port(), 8123);
    }

    #[tokio::test]
    async fn test_list_videos_newest_first() {
        let dir = TempDir::new().unwrap();
        let t1 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        touch(dir.path(), "a.mp4", t1);
        touch(dir.path(), "b.txt", t1);
        touch(dir.path(), "c.webm", t1 + Duration::from_secs(1));

        let uri = format!("/api/videos?dirPath={}", dir.path().display());
        let response = send(app(dir.path()), &uri, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let videos = json["videos"].as_array().unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0]["name"], "c.webm");
        assert_eq!(videos[0]["timestamp"], 1_001_000);
        assert_eq!(videos[1]["name"], "a.mp4");
        assert!(videos[1]["path"].as_str().unwrap().ends_with("a.mp4"));
    }

    #[tokio::test]
    async fn test_list_videos_requires_dir_path() {
        let dir = TempDir::new().unwrap();

        for uri in ["/api/videos", "/api/videos?dirPath="] {
            let response = send(app(dir.path()), uri, None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let json = body_json(response).await;
            assert!(json["error"].as_str().unwrap().contains("Directory path is required"));
        }
    }

    #[tokio::test]
    async fn test_malformed_query_is_json_bad_request() {
        let dir = TempDir::new().unwrap();

        for uri in [
            "/api/videos?dirPath=a&dirPath=b",
            "/api/stream?path=a&path=b",
        ] {
            let response = send(app(dir.path()), uri, None).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let json = body_json(response).await;
            assert!(json["error"].as_str().unwrap().contains("Malformed query string"));
        }
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_list_videos_skips_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "good.mp4", SystemTime::now());
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xff.mp4"))).unwrap();

        let uri = format!("/api/videos?dirPath={}", dir.path().display());
        let response = send(app(dir.path()), &uri, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let videos = json["videos"].as_array().unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0]["name"], "good.mp4");
    }

    #[tokio::test]
    async fn test_list_videos_missing_directory() {
        let dir = TempDir::new().unwrap();

        let uri = format!("/api/videos?dirPath={}/missing", dir.path().display());
        let response = send(app(dir.path()), &uri, None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stream_full_and_partial() {
        let dir = TempDir::new().unwrap();
        let content: Vec<u8> = (0..=255).collect();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, &content).unwrap();
        let uri = format!("/api/stream?path={}", path.display());

        let response = send(app(dir.path()), &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_LENGTH], "256");
        assert_eq!(response.headers()[CONTENT_TYPE], STREAM_CONTENT_TYPE);
        assert_eq!(body_bytes(response).await, content);

        let response = send(app(dir.path()), &uri, Some("bytes=10-19")).await;
        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(response.headers()[CONTENT_RANGE], "bytes 10-19/256");
        assert_eq!(response.headers()[CONTENT_LENGTH], "10");
        assert_eq!(body_bytes(response).await, &content[10..20]);
    }

    #[tokio::test]
    async fn test_stream_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"0123456789").unwrap();

        let response = send(app(dir.path()), "/api/stream", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let missing = format!("/api/stream?path={}/missing.mp4", dir.path().display());
        let response = send(app(dir.path()), &missing, Some("bytes=0-1")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let uri = format!("/api/stream?path={}", path.display());
        let response = send(app(dir.path()), &uri, Some("bytes=x-1")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(app(dir.path()), &uri, Some("bytes=50-")).await;
        assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(response.headers()[CONTENT_RANGE], "bytes */10");
    }

    #[tokio::test]
    async fn test_gifs_and_animations() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("wave.gif"), b"GIF89a").unwrap();
        std::fs::write(dir.path().join("clip.mp4"), b"x").unwrap();

        let response = send(app(dir.path()), "/api/gifs", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "gifs": ["wave.gif"] }));

        let response = send(app(dir.path()), "/animations/wave.gif", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"GIF89a");
    }

    #[tokio::test]
    async fn test_pages_render() {
        let dir = TempDir::new().unwrap();
        let app = router(AppState::new(
            Config::new()
                .with_animations_dir(dir.path())
                .with_default_video_dir(Some("/srv/videos".into()))
                .with_grid_size(4),
        ));

        let response = send(app.clone(), "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("/srv/videos"));
        assert!(html.contains("const GRID_SIZE = 4;"));

        let response = send(app, "/gifs", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_server_header() {
        let dir = TempDir::new().unwrap();

        let response = send(app(dir.path()), "/api/gifs", None).await;

        assert_eq!(response.headers()[SERVER], USER_AGENT);
    }
}
