//! `Range` header parsing
//!
//! Only single byte ranges of the form `bytes=<start>-<end>` are understood.
//! When several comma separated ranges are sent, the first one wins.

use crate::{
    config::RANGE_UNIT_PREFIX,
    error::{Error, Result},
};

/// An inclusive byte span within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// Offset of the first byte
    pub start: u64,
    /// Offset of the last byte, inclusive
    pub end: u64,
}

impl ByteRange {
    /// Parses a `Range` header value against a file of `file_size` bytes
    ///
    /// An omitted end means the last byte of the file, and an end past the
    /// file is clamped to it.
    ///
    /// # Errors
    /// * [`Error::InvalidRange`] when the value is malformed
    /// * [`Error::RangeNotSatisfiable`] when the start lies beyond the file
    ///   or after the end
    pub fn parse(header: &str, file_size: u64) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidRange {
            header: header.to_string(),
            reason: reason.to_string(),
        };

        let ranges = header
            .trim()
            .strip_prefix(RANGE_UNIT_PREFIX)
            .ok_or_else(|| invalid("expected a 'bytes=' range"))?;
        let first = ranges.split(',').next().unwrap_or_default().trim();
        let (start, end) = first
            .split_once('-')
            .ok_or_else(|| invalid("missing '-' separator"))?;

        let start: u64 = start
            .trim()
            .parse()
            .map_err(|_| invalid("start is not a number"))?;
        let end: Option<u64> = match end.trim() {
            "" => None,
            end => Some(end.parse().map_err(|_| invalid("end is not a number"))?),
        };

        if start >= file_size {
            return Err(Error::RangeNotSatisfiable {
                header: header.to_string(),
                file_size,
            });
        }

        let last = file_size - 1;
        let end = end.map_or(last, |end| end.min(last));
        if start > end {
            return Err(Error::RangeNotSatisfiable {
                header: header.to_string(),
                file_size,
            });
        }

        Ok(Self { start, end })
    }

    /// Number of bytes covered by the range
    pub fn content_length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Value of the `Content-Range` response header
    pub fn content_range(&self, file_size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, file_size)
    }
}
