//! Three-component vector operations.

/// Cartesian vector, either a direction or a position/velocity.
pub type Vector3 = [f64; 3];

/// Position and velocity of a body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PosVel {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl PosVel {
    pub const fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }
}

/// Modulus and direction of a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub modulus: f64,
    pub unit: Vector3,
}

pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn modulus(a: &Vector3) -> f64 {
    dot(a, a).sqrt()
}

/// Split a vector into modulus and unit vector.
///
/// A null vector yields a zero modulus and a null unit vector rather
/// than NaN components.
pub fn normalize(a: &Vector3) -> Normalized {
    let w = modulus(a);
    if w == 0.0 {
        return Normalized {
            modulus: 0.0,
            unit: [0.0; 3],
        };
    }
    Normalized {
        modulus: w,
        unit: scale(1.0 / w, a),
    }
}

pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(s: f64, a: &Vector3) -> Vector3 {
    [s * a[0], s * a[1], s * a[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross(&[0.0, 1.0, 0.0], &[1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn cross_is_orthogonal() {
        let a = [2.0, 3.0, 4.0];
        let b = [-1.0, 5.0, 0.5];
        let c = cross(&a, &b);
        assert_abs_diff_eq!(dot(&a, &c), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dot(&b, &c), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_known() {
        let n = normalize(&[0.3, 1.2, -2.5]);
        assert_abs_diff_eq!(n.modulus, 2.789_265_136_196_270_604, epsilon = 1e-12);
        assert_abs_diff_eq!(n.unit[0], 0.1075552109073112058, epsilon = 1e-12);
        assert_abs_diff_eq!(n.unit[1], 0.4302208436292448232, epsilon = 1e-12);
        assert_abs_diff_eq!(n.unit[2], -0.8962934242275933816, epsilon = 1e-12);
    }

    #[test]
    fn normalize_null_vector() {
        let n = normalize(&[0.0; 3]);
        assert_eq!(n.modulus, 0.0);
        assert_eq!(n.unit, [0.0; 3]);
    }
}
