//! 3×3 matrices and elementary frame rotations.
//!
//! The rotation functions follow the ERFA convention: `rotate_x(phi, r)`
//! replaces `r` with `Rx(phi) · r`, where `Rx` rotates the coordinate
//! frame anticlockwise about the x-axis as seen from the positive end.
//! Successive calls therefore compose left-to-right in call order, and
//! every matrix builder in the engine depends on that order.

use crate::vector::Vector3;

/// Row-major 3×3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

pub const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Rotate an r-matrix about the x-axis.
pub fn rotate_x(phi: f64, r: &mut Matrix3) {
    let (s, c) = phi.sin_cos();
    let a10 = c * r[1][0] + s * r[2][0];
    let a11 = c * r[1][1] + s * r[2][1];
    let a12 = c * r[1][2] + s * r[2][2];
    let a20 = -s * r[1][0] + c * r[2][0];
    let a21 = -s * r[1][1] + c * r[2][1];
    let a22 = -s * r[1][2] + c * r[2][2];
    r[1] = [a10, a11, a12];
    r[2] = [a20, a21, a22];
}

/// Rotate an r-matrix about the y-axis.
pub fn rotate_y(theta: f64, r: &mut Matrix3) {
    let (s, c) = theta.sin_cos();
    let a00 = c * r[0][0] - s * r[2][0];
    let a01 = c * r[0][1] - s * r[2][1];
    let a02 = c * r[0][2] - s * r[2][2];
    let a20 = s * r[0][0] + c * r[2][0];
    let a21 = s * r[0][1] + c * r[2][1];
    let a22 = s * r[0][2] + c * r[2][2];
    r[0] = [a00, a01, a02];
    r[2] = [a20, a21, a22];
}

/// Rotate an r-matrix about the z-axis.
pub fn rotate_z(psi: f64, r: &mut Matrix3) {
    let (s, c) = psi.sin_cos();
    let a00 = c * r[0][0] + s * r[1][0];
    let a01 = c * r[0][1] + s * r[1][1];
    let a02 = c * r[0][2] + s * r[1][2];
    let a10 = -s * r[0][0] + c * r[1][0];
    let a11 = -s * r[0][1] + c * r[1][1];
    let a12 = -s * r[0][2] + c * r[1][2];
    r[0] = [a00, a01, a02];
    r[1] = [a10, a11, a12];
}

/// Matrix product `a · b`.
pub fn mat_mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

pub fn transpose(r: &Matrix3) -> Matrix3 {
    [
        [r[0][0], r[1][0], r[2][0]],
        [r[0][1], r[1][1], r[2][1]],
        [r[0][2], r[1][2], r[2][2]],
    ]
}

/// Matrix times vector, `r · p`.
pub fn mat_vec(r: &Matrix3, p: &Vector3) -> Vector3 {
    [
        r[0][0] * p[0] + r[0][1] * p[1] + r[0][2] * p[2],
        r[1][0] * p[0] + r[1][1] * p[1] + r[1][2] * p[2],
        r[2][0] * p[0] + r[2][1] * p[1] + r[2][2] * p[2],
    ]
}

/// Transpose of matrix times vector, `rᵀ · p`.
pub fn transpose_vec(r: &Matrix3, p: &Vector3) -> Vector3 {
    [
        r[0][0] * p[0] + r[1][0] * p[1] + r[2][0] * p[2],
        r[0][1] * p[0] + r[1][1] * p[1] + r[2][1] * p[2],
        r[0][2] * p[0] + r[1][2] * p[1] + r[2][2] * p[2],
    ]
}

pub fn determinant(r: &Matrix3) -> f64 {
    r[0][0] * (r[1][1] * r[2][2] - r[1][2] * r[2][1])
        - r[0][1] * (r[1][0] * r[2][2] - r[1][2] * r[2][0])
        + r[0][2] * (r[1][0] * r[2][1] - r[1][1] * r[2][0])
}
