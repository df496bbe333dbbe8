//! Flat little-endian series blobs.
//!
//! Large coefficient tables ship as raw arrays of little-endian `f64`
//! and `i32` values with a fixed element count per table. There is no
//! header: a blob is valid exactly when its length matches the
//! documented record size times the record count.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading or decoding a series blob.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BlobError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{table}: expected {expected} bytes, found {actual}")]
    Size {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Read a blob from disk.
pub fn read_blob(path: &Path) -> Result<Vec<u8>, BlobError> {
    std::fs::read(path).map_err(|source| BlobError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Sequential reader over a blob whose size has already been checked.
#[derive(Debug)]
pub struct LeReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> LeReader<'a> {
    /// Wrap `bytes` after checking it holds exactly `count` records of
    /// `record_size` bytes.
    pub fn new(
        table: &'static str,
        bytes: &'a [u8],
        record_size: usize,
        count: usize,
    ) -> Result<Self, BlobError> {
        let expected = record_size * count;
        if bytes.len() != expected {
            return Err(BlobError::Size {
                table,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes, pos: 0 })
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut buf = [0u8; N];
        // Callers never read past the length validated in `new`.
        let end = (self.pos + N).min(self.bytes.len());
        buf[..end - self.pos].copy_from_slice(&self.bytes[self.pos..end]);
        self.pos = end;
        buf
    }

    pub fn f64(&mut self) -> f64 {
        f64::from_le_bytes(self.take::<8>())
    }

    pub fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take::<4>())
    }

    /// Read three consecutive `f64` values.
    pub fn triple(&mut self) -> [f64; 3] {
        [self.f64(), self.f64(), self.f64()]
    }
}

/// Decode a blob of `count` × `[f64; 3]` rows.
pub fn decode_triples(
    table: &'static str,
    bytes: &[u8],
    count: usize,
) -> Result<Vec<[f64; 3]>, BlobError> {
    let mut reader = LeReader::new(table, bytes, 24, count)?;
    Ok((0..count).map(|_| reader.triple()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(values: &[f64]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn decodes_rows_in_order() {
        let bytes = encode(&[1.5, -2.0, 3.25, 4.0, 5.0, 6.0]);
        let rows = decode_triples("T", &bytes, 2).unwrap();
        assert_eq!(rows, vec![[1.5, -2.0, 3.25], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn rejects_wrong_length() {
        let bytes = encode(&[1.0, 2.0]);
        let err = decode_triples("T", &bytes, 1).unwrap_err();
        assert!(matches!(
            err,
            BlobError::Size {
                expected: 24,
                actual: 16,
                ..
            }
        ));
    }

    #[test]
    fn mixed_records() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(-3i32).to_le_bytes());
        bytes.extend_from_slice(&0.125f64.to_le_bytes());
        let mut r = LeReader::new("M", &bytes, 12, 1).unwrap();
        assert_eq!(r.i32(), -3);
        assert_eq!(r.f64(), 0.125);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_blob(Path::new("/nonexistent/drishti/blob.dat")).unwrap_err();
        assert!(matches!(err, BlobError::Io { .. }));
    }
}
