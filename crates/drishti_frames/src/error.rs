//! Error types for frame models and geodesy.

use drishti_math::BlobError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FrameError {
    #[error("nutation series: {0}")]
    Table(#[from] BlobError),

    #[error("ellipsoid equatorial radius must be positive, got {0}")]
    BadRadius(f64),

    #[error("ellipsoid flattening must be in [0, 1), got {0}")]
    BadFlattening(f64),
}
