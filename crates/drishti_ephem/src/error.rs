//! Error types for Earth ephemeris loading.

use drishti_math::BlobError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("EPV00 series: {0}")]
    Table(#[from] BlobError),
}
