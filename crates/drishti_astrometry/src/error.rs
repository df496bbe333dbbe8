//! Error types for environment setup and the UTC-driven composites.

use drishti_ephem::EphemerisError;
use drishti_frames::FrameError;
use drishti_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AstrometryError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Frames(#[from] FrameError),

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
