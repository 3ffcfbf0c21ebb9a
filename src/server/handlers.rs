//! JSON and streaming endpoints

use crate::{
    config::{MALFORMED_QUERY_MSG, MISSING_DIR_PATH_MSG, MISSING_VIDEO_PATH_MSG},
    error::{Error, Result},
    media::{MediaFile, MediaStream, open_stream, scan_animations, scan_directory},
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use http::{HeaderMap, header::RANGE};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::AppState;

/// Query of the video listing endpoint
#[derive(Debug, Deserialize)]
pub struct VideosQuery {
    #[serde(rename = "dirPath")]
    dir_path: Option<String>,
}

/// Body of the video listing endpoint
#[derive(Debug, Serialize)]
pub struct VideosResponse {
    videos: Vec<MediaFile>,
}

/// Query of the streaming endpoint
#[derive(Debug, Deserialize)]
pub struct StreamQuery {
    path: Option<String>,
}

/// Body of the animation listing endpoint
#[derive(Debug, Serialize)]
pub struct GifsResponse {
    gifs: Vec<String>,
}

/// A query extraction whose rejection is turned into [`Error::InvalidRequest`]
type QueryResult<T> = std::result::Result<Query<T>, QueryRejection>;

fn parse_query<T>(query: QueryResult<T>) -> Result<T> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| Error::InvalidRequest {
            parameter: "query".to_string(),
            context: format!("{MALFORMED_QUERY_MSG}: {}", rejection.body_text()),
        })
}

fn required(value: Option<String>, parameter: &str, context: &str) -> Result<String> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::InvalidRequest {
            parameter: parameter.to_string(),
            context: context.to_string(),
        })
}

/// `GET /api/videos?dirPath=<dir>`
pub async fn list_videos(
    query: QueryResult<VideosQuery>,
) -> Result<Json<VideosResponse>> {
    let dir_path = required(parse_query(query)?.dir_path, "dirPath", MISSING_DIR_PATH_MSG)?;
    let videos = scan_directory(Path::new(&dir_path)).await?;
    Ok(Json(VideosResponse { videos }))
}

/// `GET /api/stream?path=<file>`, honoring an optional `Range` header
pub async fn stream_video(
    query: QueryResult<StreamQuery>,
    headers: HeaderMap,
) -> Result<MediaStream> {
    let path = required(parse_query(query)?.path, "path", MISSING_VIDEO_PATH_MSG)?;
    let range = headers
        .get(RANGE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
    open_stream(Path::new(&path), range.as_deref()).await
}

/// `GET /api/gifs`
pub async fn list_gifs(State(state): State<AppState>) -> Result<Json<GifsResponse>> {
    let gifs = scan_animations(&state.config.animations_dir).await?;
    Ok(Json(GifsResponse { gifs }))
}
