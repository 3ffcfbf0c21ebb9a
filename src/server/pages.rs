//! HTML pages rendered with askama

use crate::{
    config::{GALLERY_GRID_SIZE, GALLERY_SHUFFLE_INTERVAL_MS},
    error::{Error, Result},
};
use askama::Template;
use axum::{extract::State, response::Html};

use super::AppState;

/// The video grid page
#[derive(Template)]
#[template(path = "index.html")]
struct VideoGridTemplate {
    default_dir: String,
    grid_size: usize,
    poll_interval_ms: u64,
    shuffle_interval_ms: u64,
}

/// The animation gallery page
#[derive(Template)]
#[template(path = "gifs.html")]
struct GalleryTemplate {
    grid_size: usize,
    shuffle_interval_ms: u64,
}

fn render<T: Template>(template: &T, template_name: &str) -> Result<Html<String>> {
    template
        .render()
        .map(Html)
        .map_err(|e| Error::TemplateRenderError {
            template_name: template_name.to_string(),
            source: e.into(),
        })
}

/// `GET /`
pub async fn video_grid(State(state): State<AppState>) -> Result<Html<String>> {
    let config = &state.config;
    let template = VideoGridTemplate {
        default_dir: config
            .default_video_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        grid_size: config.grid_size,
        poll_interval_ms: config.poll_interval_ms,
        shuffle_interval_ms: config.shuffle_interval_ms,
    };
    render(&template, "index.html")
}

/// `GET /gifs`
pub async fn gallery() -> Result<Html<String>> {
    let template = GalleryTemplate {
        grid_size: GALLERY_GRID_SIZE,
        shuffle_interval_ms: GALLERY_SHUFFLE_INTERVAL_MS,
    };
    render(&template, "gifs.html")
}
