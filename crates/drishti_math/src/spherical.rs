//! Cartesian ↔ spherical coordinate conversion.
//!
//! Longitude-like angles `theta` are measured in the x-y plane from +x
//! toward +y; latitude-like angles `phi` are elevations above that plane.

use crate::vector::Vector3;

/// Direction on the sphere, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalAngles {
    /// Longitude angle, range (−π, π].
    pub theta: f64,
    /// Latitude angle, range [−π/2, π/2].
    pub phi: f64,
}

/// Direction plus distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPosition {
    pub theta: f64,
    pub phi: f64,
    /// Radial distance, in the units of the Cartesian input.
    pub r: f64,
}

/// Direction of a Cartesian vector. The null vector maps to `(0, 0)`.
pub fn c2s(p: &Vector3) -> SphericalAngles {
    let (x, y, z) = (p[0], p[1], p[2]);
    let d2 = x * x + y * y;

    let theta = if d2 == 0.0 { 0.0 } else { y.atan2(x) };
    let phi = if z == 0.0 { 0.0 } else { z.atan2(d2.sqrt()) };

    SphericalAngles { theta, phi }
}

/// Unit vector for a spherical direction.
pub fn s2c(theta: f64, phi: f64) -> Vector3 {
    let cp = phi.cos();
    [theta.cos() * cp, theta.sin() * cp, phi.sin()]
}

/// Direction and distance of a Cartesian vector.
pub fn p2s(p: &Vector3) -> SphericalPosition {
    let SphericalAngles { theta, phi } = c2s(p);
    let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
    SphericalPosition { theta, phi, r }
}

/// Cartesian vector for a spherical direction and distance.
pub fn s2p(theta: f64, phi: f64, r: f64) -> Vector3 {
    let u = s2c(theta, phi);
    [r * u[0], r * u[1], r * u[2]]
}
