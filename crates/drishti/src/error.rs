//! Unified error type for the convenience API.

use drishti_astrometry::AstrometryError;
use drishti_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrishtiError {
    /// [`crate::init`] has not been called.
    #[error("global environment not initialized; call drishti::init first")]
    NotInitialized,

    /// A date string did not match `YYYY-MM-DDTHH:MM:SS[.fff]Z`.
    #[error("invalid date string: {0}")]
    DateParse(&'static str),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Astrometry(#[from] AstrometryError),
}
