//! Refraction constants for the A·tan z + B·tan³ z model.
//!
//! The constants come from Green's formula using a refractive index
//! computed for the observer's pressure, temperature and humidity
//! (Rueger for radio, Barrell & Sears with Hohenkerk's adjustments for
//! optical/IR) and Stone's formula for the lapse-rate term.
//!
//! Sources:
//! - Green R.M., Spherical Astronomy, CUP 1985, §4.31
//! - Hohenkerk C.Y. & Sinclair A.T., NAO Technical Note 63 (1985)
//! - Rueger J.M., FIG XXII Congress (2002)
//! - Stone R.C., PASP 108, 1051 (1996)

/// Wavelengths above this (micrometres) use the radio formula.
const RADIO_SWITCH_UM: f64 = 100.0;

/// Refraction constants, radians. `dZ = A·tan Z + B·tan³ Z` where Z is
/// the observed zenith distance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RefractionConstants {
    pub refa: f64,
    pub refb: f64,
}

impl RefractionConstants {
    /// No refraction.
    pub const NONE: Self = Self { refa: 0.0, refb: 0.0 };

    /// Refraction at zenith distance `z` (radians, observed).
    pub fn at(&self, z: f64) -> f64 {
        let tz = z.tan();
        (self.refa + self.refb * tz * tz) * tz
    }
}

/// Refraction constants for pressure `phpa` (hPa), temperature `tc`
/// (°C), relative humidity `rh` (0-1) and wavelength `wl` (µm).
///
/// Inputs are clamped to pressure 0-10,000 hPa, temperature −150 to
/// +200 °C, humidity 0-1 and wavelength 0.1 µm to 1 m. Zero pressure
/// gives zero constants.
pub fn refco(phpa: f64, tc: f64, rh: f64, wl: f64) -> RefractionConstants {
    let optic = wl <= RADIO_SWITCH_UM;

    let t = tc.clamp(-150.0, 200.0);
    let p = phpa.clamp(0.0, 10_000.0);
    let r = rh.clamp(0.0, 1.0);
    let w = wl.clamp(0.1, 1e6);

    // Water vapour pressure at the observer.
    let pw = if p > 0.0 {
        let ps = 10f64.powf((0.7859 + 0.03477 * t) / (1.0 + 0.00412 * t))
            * (1.0 + p * (4.5e-6 + 6e-10 * t * t));
        r * ps / (1.0 - (1.0 - r) * ps / p)
    } else {
        0.0
    };

    // Refractive index minus 1.
    let tk = t + 273.15;
    let gamma = if optic {
        let wlsq = w * w;
        ((77.534_84e-6 + (4.391_08e-7 + 3.666e-9 / wlsq) / wlsq) * p - 11.2684e-6 * pw) / tk
    } else {
        (77.6890e-6 * p - (6.3938e-6 - 0.375_463 / tk) * pw) / tk
    };

    let mut beta = 4.4474e-6 * tk;
    if !optic {
        beta -= 0.0074 * pw * beta;
    }

    RefractionConstants {
        refa: gamma * (1.0 - beta),
        refb: -gamma * (beta - gamma / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn optical_constants() {
        let c = refco(800.0, 10.0, 0.9, 0.4);
        assert_abs_diff_eq!(c.refa, 0.226_494_995_624_141_500_9e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(c.refb, -0.259_865_826_172_934_397_0e-6, epsilon = 1e-18);
    }

    #[test]
    fn site_constants() {
        let c = refco(731.0, 12.8, 0.59, 0.55);
        assert_abs_diff_eq!(c.refa, 0.201_418_778_594_039_692_1e-3, epsilon = 1e-15);
        assert_abs_diff_eq!(c.refb, -0.236_140_831_494_369_622_7e-6, epsilon = 1e-18);
    }

    #[test]
    fn radio_is_stronger_than_optical_when_humid() {
        let optical = refco(1013.25, 20.0, 0.8, 0.55);
        let radio = refco(1013.25, 20.0, 0.8, 2e5);
        assert!(radio.refa > optical.refa);
    }

    #[test]
    fn vacuum_disables_refraction() {
        assert_eq!(refco(0.0, 0.0, 0.0, 0.0), RefractionConstants::NONE);
    }

    #[test]
    fn increases_with_zenith_distance() {
        let c = refco(1013.25, 10.0, 0.5, 0.55);
        let mut last = 0.0;
        for deg in 1..=85 {
            let dz = c.at(f64::from(deg).to_radians());
            assert!(dz > last, "refraction not increasing at {deg} deg");
            last = dz;
        }
    }
}
