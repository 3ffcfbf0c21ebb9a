//! Range-aware file streaming for reelgrid
//!
//! Files are re-opened on every request and read lazily in fixed size chunks.
//! The open handle is owned by the response body, so it is released as soon
//! as the body finishes or the client goes away.

use crate::{
    config::{STREAM_CHUNK_SIZE, STREAM_CONTENT_TYPE, VIDEO_NOT_FOUND_MSG},
    error::{Error, Result},
    media::ByteRange,
    utils::format_file_size,
};
use axum::{
    body::{Body, Bytes},
    response::{IntoResponse, Response},
};
use futures::{Stream, stream};
use http::{
    StatusCode,
    header::{ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE},
};
use log::debug;
use std::{
    io::{ErrorKind, SeekFrom},
    path::Path,
};
use tokio::{
    fs::{self, File},
    io::{AsyncReadExt, AsyncSeekExt},
};

/// An opened file ready to be sent, whole or in part
pub struct MediaStream {
    file_size: u64,
    range: Option<ByteRange>,
    body: Body,
}

impl std::fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStream")
            .field("file_size", &self.file_size)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

impl MediaStream {
    /// Size of the whole file on disk
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// The requested span, if the request carried a `Range` header
    pub fn range(&self) -> Option<ByteRange> {
        self.range
    }

    /// `206 Partial Content` for ranged requests, `200 OK` otherwise
    pub fn status(&self) -> StatusCode {
        match self.range {
            Some(_) => StatusCode::PARTIAL_CONTENT,
            None => StatusCode::OK,
        }
    }

    /// Number of bytes the body will yield
    pub fn content_length(&self) -> u64 {
        self.range
            .map_or(self.file_size, |range| range.content_length())
    }
}

impl IntoResponse for MediaStream {
    fn into_response(self) -> Response {
        let status = self.status();
        let content_length = self.content_length().to_string();
        match self.range {
            Some(range) => (
                status,
                [
                    (CONTENT_RANGE, range.content_range(self.file_size)),
                    (ACCEPT_RANGES, "bytes".to_string()),
                    (CONTENT_LENGTH, content_length),
                    (CONTENT_TYPE, STREAM_CONTENT_TYPE.to_string()),
                ],
                self.body,
            )
                .into_response(),
            None => (
                status,
                [
                    (CONTENT_LENGTH, content_length),
                    (CONTENT_TYPE, STREAM_CONTENT_TYPE.to_string()),
                ],
                self.body,
            )
                .into_response(),
        }
    }
}

fn not_found(path: &Path) -> Error {
    Error::MediaFileNotFound {
        path: path.display().to_string(),
        context: VIDEO_NOT_FOUND_MSG.to_string(),
    }
}

fn open_failed(path: &Path, source: std::io::Error) -> Error {
    if source.kind() == ErrorKind::NotFound {
        return not_found(path);
    }
    Error::MediaReadFailed {
        path: path.display().to_string(),
        source,
    }
}

/// Opens `path` for streaming, honoring an optional `Range` header value
///
/// The existence check happens before the range is looked at, so a missing
/// file is always [`Error::MediaFileNotFound`].
pub async fn open_stream(path: &Path, range_header: Option<&str>) -> Result<MediaStream> {
    let metadata = fs::metadata(path)
        .await
        .map_err(|e| open_failed(path, e))?;
    if !metadata.is_file() {
        return Err(not_found(path));
    }

    let file_size = metadata.len();
    let range = range_header
        .map(|header| ByteRange::parse(header, file_size))
        .transpose()?;

    let mut file = File::open(path).await.map_err(|e| open_failed(path, e))?;
    let (offset, length) = match range {
        Some(range) => (range.start, range.content_length()),
        None => (0, file_size),
    };
    if offset > 0 {
        file.seek(SeekFrom::Start(offset))
            .await
            .map_err(|e| open_failed(path, e))?;
    }

    debug!(
        "Streaming {} bytes from offset {offset} of {} ({})",
        length,
        path.display(),
        format_file_size(file_size)
    );

    Ok(MediaStream {
        file_size,
        range,
        body: Body::from_stream(read_chunks(file, length)),
    })
}

/// Reads at most `length` bytes from the current position of `file`
fn read_chunks(file: File, length: u64) -> impl Stream<Item = std::io::Result<Bytes>> + Send {
    stream::try_unfold(file.take(length), |mut reader| async move {
        let mut buffer = vec![0; STREAM_CHUNK_SIZE];
        let read = reader.read(&mut buffer).await?;
        if read == 0 {
            return Ok(None);
        }
        buffer.truncate(read);
        Ok::<_, std::io::Error>(Some((Bytes::from(buffer), reader)))
    })
}
