//! Directory scanning for media files
//!
//! This module lists the direct children of a directory that the display
//! client can show, newest first.

use crate::{
    config::DIRECTORY_NOT_FOUND_MSG,
    error::{Error, Result},
    utils::{is_animation_file, is_supported_video_file, system_time_to_millis},
};
use log::{debug, info, warn};
use serde::{Serialize, Serializer};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::SystemTime,
};
use tokio::fs;

/// A video file found by a directory scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    name: String,
    path: PathBuf,
    #[serde(rename = "timestamp", serialize_with = "serialize_millis")]
    modified_at: SystemTime,
}

impl MediaFile {
    /// Creates a media file record
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, modified_at: SystemTime) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            modified_at,
        }
    }

    /// File name including its extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last modification time at scan time
    pub fn modified_at(&self) -> SystemTime {
        self.modified_at
    }

    /// Last modification time in milliseconds since the Unix epoch
    pub fn timestamp(&self) -> u64 {
        system_time_to_millis(self.modified_at)
    }
}

fn serialize_millis<S: Serializer>(
    time: &SystemTime,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(system_time_to_millis(*time))
}

fn read_failed(path: &Path, source: std::io::Error) -> Error {
    Error::MediaReadFailed {
        path: path.display().to_string(),
        source,
    }
}

/// Lists the video files directly inside `dir_path`, most recently modified first
///
/// Subdirectories are not descended into. Files that vanish between listing
/// and inspection are skipped, as are files whose path is not valid UTF-8
/// since they could not be requested back through the streaming endpoint.
///
/// # Errors
/// * [`Error::MediaFileNotFound`] when `dir_path` does not exist
/// * [`Error::MediaReadFailed`] for any other read failure
pub async fn scan_directory(dir_path: &Path) -> Result<Vec<MediaFile>> {
    info!("Scanning directory for video files: {}", dir_path.display());

    if !fs::try_exists(dir_path)
        .await
        .map_err(|e| read_failed(dir_path, e))?
    {
        return Err(Error::MediaFileNotFound {
            path: dir_path.display().to_string(),
            context: DIRECTORY_NOT_FOUND_MSG.to_string(),
        });
    }

    let dir_path = std::path::absolute(dir_path).map_err(|e| read_failed(dir_path, e))?;
    let mut entries = fs::read_dir(&dir_path)
        .await
        .map_err(|e| read_failed(&dir_path, e))?;

    let mut videos = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| read_failed(&dir_path, e))?
    {
        let path = entry.path();
        if !is_supported_video_file(&path) {
            debug!("Skipping unsupported file: {}", path.display());
            continue;
        }
        if path.to_str().is_none() {
            debug!("Skipping file with a non UTF-8 path: {}", path.display());
            continue;
        }

        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Skipping vanished file: {}", path.display());
                continue;
            }
            Err(e) => return Err(read_failed(&path, e)),
        };
        if !metadata.is_file() {
            debug!("Skipping non-file entry: {}", path.display());
            continue;
        }

        let modified_at = metadata.modified().map_err(|e| read_failed(&path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!("Found video file: {}", path.display());
        videos.push(MediaFile::new(name, path, modified_at));
    }

    sort_newest_first(&mut videos);

    info!(
        "Found {} video files in {}",
        videos.len(),
        dir_path.display()
    );
    Ok(videos)
}

/// Orders files by modification time descending, then by name
pub fn sort_newest_first(files: &mut [MediaFile]) {
    files.sort_by(|a, b| {
        b.modified_at
            .cmp(&a.modified_at)
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Lists the animation file names directly inside `dir_path`, sorted by name
///
/// A missing directory yields an empty list.
pub async fn scan_animations(dir_path: &Path) -> Result<Vec<String>> {
    debug!("Scanning directory for animations: {}", dir_path.display());

    let mut entries = match fs::read_dir(dir_path).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Animations directory {} does not exist", dir_path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(read_failed(dir_path, e)),
    };

    let mut animations = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| read_failed(dir_path, e))?
    {
        let path = entry.path();
        if !is_animation_file(&path) {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            debug!("Skipping animation with a non UTF-8 name: {}", path.display());
            continue;
        };

        let file_type = match entry.file_type().await {
            Ok(file_type) => file_type,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Skipping vanished animation: {}", path.display());
                continue;
            }
            Err(e) => return Err(read_failed(&path, e)),
        };
        if file_type.is_file() {
            animations.push(name);
        } else {
            debug!("Skipping non-file entry: {}", path.display());
        }
    }

    animations.sort();
    Ok(animations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, time::Duration};
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, modified_at: SystemTime) {
        let file = File::create(dir.join(name)).unwrap();
        file.set_modified(modified_at).unwrap();
    }

    fn names(files: &[MediaFile]) -> Vec<&str> {
        files.iter().map(MediaFile::name).collect()
    }

    #[tokio::test]
    async fn test_scan_returns_videos_newest_first() {
        let dir = TempDir::new().unwrap();
        let t1 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let t2 = t1 + Duration::from_secs(60);
        touch(dir.path(), "a.mp4", t1);
        touch(dir.path(), "b.txt", t2);
        touch(dir.path(), "c.webm", t2);

        let videos = scan_directory(dir.path()).await.unwrap();

        assert_eq!(names(&videos), vec!["c.webm", "a.mp4"]);
        assert_eq!(videos[0].modified_at(), t2);
        assert_eq!(videos[1].timestamp(), 1_000_000);
    }

    #[tokio::test]
    async fn test_scan_filters_to_allow_list() {
        let dir = TempDir::new().unwrap();
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(10_000);
        for (offset, name) in [
            "one.mp4", "two.webm", "three.ogg", "four.mov", "five.avi", "six.MKV", "cover.gif",
            "notes.txt", "noext",
        ]
        .iter()
        .enumerate()
        {
            touch(dir.path(), name, base + Duration::from_secs(offset as u64));
        }

        let videos = scan_directory(dir.path()).await.unwrap();

        assert_eq!(
            names(&videos),
            vec!["six.MKV", "five.avi", "four.mov", "three.ogg", "two.webm", "one.mp4"]
        );
    }

    #[tokio::test]
    async fn test_scan_does_not_recurse() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested.mp4");
        std::fs::create_dir(&nested).unwrap();
        touch(&nested, "inner.mp4", SystemTime::now());
        touch(dir.path(), "top.mp4", SystemTime::now());

        let videos = scan_directory(dir.path()).await.unwrap();

        assert_eq!(names(&videos), vec!["top.mp4"]);
    }

    #[tokio::test]
    async fn test_scan_returns_absolute_paths() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "clip.mp4", SystemTime::now());

        let videos = scan_directory(dir.path()).await.unwrap();

        assert!(videos[0].path().is_absolute());
        assert!(videos[0].path().ends_with("clip.mp4"));
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_scan_skips_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "good.mp4", SystemTime::now());
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xff.mp4"))).unwrap();
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xff.gif"))).unwrap();

        let videos = scan_directory(dir.path()).await.unwrap();
        let animations = scan_animations(dir.path()).await.unwrap();

        assert_eq!(names(&videos), vec!["good.mp4"]);
        assert!(serde_json::to_string(&videos).is_ok());
        assert!(animations.is_empty());
    }

    #[tokio::test]
    async fn test_scan_missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let error = scan_directory(&missing).await.unwrap_err();

        assert!(matches!(error, Error::MediaFileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_scan_file_instead_of_directory_is_read_failure() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "plain.mp4", SystemTime::now());

        let error = scan_directory(&dir.path().join("plain.mp4"))
            .await
            .unwrap_err();

        assert!(matches!(error, Error::MediaReadFailed { .. }));
    }

    #[test]
    fn test_sort_breaks_ties_by_name() {
        let same = SystemTime::UNIX_EPOCH + Duration::from_secs(5);
        let mut files = vec![
            MediaFile::new("b.mp4", "/v/b.mp4", same),
            MediaFile::new("a.mp4", "/v/a.mp4", same),
        ];

        sort_newest_first(&mut files);

        assert_eq!(names(&files), vec!["a.mp4", "b.mp4"]);
    }

    #[test]
    fn test_media_file_serializes_timestamp_millis() {
        let file = MediaFile::new(
            "a.mp4",
            "/v/a.mp4",
            SystemTime::UNIX_EPOCH + Duration::from_millis(42),
        );

        let value = serde_json::to_value(&file).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "name": "a.mp4", "path": "/v/a.mp4", "timestamp": 42 })
        );
    }

    #[tokio::test]
    async fn test_scan_animations() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.gif", SystemTime::now());
        touch(dir.path(), "a.GIF", SystemTime::now());
        touch(dir.path(), "c.mp4", SystemTime::now());
        std::fs::create_dir(dir.path().join("folder.gif")).unwrap();

        let animations = scan_animations(dir.path()).await.unwrap();

        assert_eq!(animations, vec!["a.GIF", "b.gif"]);
    }

    #[tokio::test]
    async fn test_scan_animations_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();

        let animations = scan_animations(&dir.path().join("missing")).await.unwrap();

        assert!(animations.is_empty());
    }
}
