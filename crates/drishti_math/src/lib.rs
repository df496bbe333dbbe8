//! Numerical kernel shared by every drishti crate.
//!
//! This crate provides:
//! - Fixed-size `[f64; 3]` vectors and `[[f64; 3]; 3]` matrices
//! - Elementary frame rotations in the ERFA composition order
//! - Angle normalization to `[0, 2π)` and `(−π, π]`
//! - Cartesian ↔ spherical conversion
//! - Astronomical constants
//! - Decoding of flat little-endian series blobs

pub mod angle;
pub mod blob;
pub mod constants;
pub mod matrix;
pub mod spherical;
pub mod vector;

pub use angle::{anp, anpm};
pub use blob::{BlobError, LeReader, decode_triples, read_blob};
pub use matrix::{
    IDENTITY, Matrix3, determinant, mat_mul, mat_vec, rotate_x, rotate_y, rotate_z, transpose,
    transpose_vec,
};
pub use spherical::{SphericalAngles, SphericalPosition, c2s, p2s, s2c, s2p};
pub use vector::{
    Normalized, PosVel, Vector3, add, cross, dot, modulus, normalize, scale, sub,
};
