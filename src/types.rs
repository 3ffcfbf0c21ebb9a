//! Types used in reelgrid

use std::path::Path;

/// Video container formats accepted by the directory lister
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoExtension {
    /// MPEG-4 Part 14
    Mp4,
    /// WebM
    Webm,
    /// Ogg
    Ogg,
    /// QuickTime
    Mov,
    /// Audio Video Interleave
    Avi,
    /// Matroska
    Mkv,
}

impl VideoExtension {
    /// Returns the file extension for the video type
    pub fn extension(&self) -> &'static str {
        match self {
            VideoExtension::Mp4 => "mp4",
            VideoExtension::Webm => "webm",
            VideoExtension::Ogg => "ogg",
            VideoExtension::Mov => "mov",
            VideoExtension::Avi => "avi",
            VideoExtension::Mkv => "mkv",
        }
    }

    /// Returns all supported video types
    pub fn all() -> Vec<VideoExtension> {
        vec![
            VideoExtension::Mp4,
            VideoExtension::Webm,
            VideoExtension::Ogg,
            VideoExtension::Mov,
            VideoExtension::Avi,
            VideoExtension::Mkv,
        ]
    }

    /// Matches the extension of `path`, ignoring case
    pub fn from_path(path: &Path) -> Option<VideoExtension> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        VideoExtension::all()
            .into_iter()
            .find(|video_type| video_type.extension() == extension)
    }
}

impl std::fmt::Display for VideoExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SUPPORTED_VIDEO_EXTENSIONS;

    #[test]
    fn test_video_extension_matches_allow_list() {
        let all: Vec<&str> = VideoExtension::all()
            .iter()
            .map(|video_type| video_type.extension())
            .collect();
        assert_eq!(all, SUPPORTED_VIDEO_EXTENSIONS);
    }

    #[test]
    fn test_video_extension_from_path() {
        assert_eq!(
            VideoExtension::from_path(Path::new("clip.mp4")),
            Some(VideoExtension::Mp4)
        );
        assert_eq!(
            VideoExtension::from_path(Path::new("CLIP.MKV")),
            Some(VideoExtension::Mkv)
        );
        assert_eq!(VideoExtension::from_path(Path::new("notes.txt")), None);
        assert_eq!(VideoExtension::from_path(Path::new("mp4")), None);
    }

    #[test]
    fn test_video_extension_display() {
        assert_eq!(VideoExtension::Webm.to_string(), "webm");
        assert_eq!(VideoExtension::Ogg.to_string(), "ogg");
    }
}
