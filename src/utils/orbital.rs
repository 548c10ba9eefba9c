//! Orbital mechanics helpers

use std::f64::consts::PI;

use crate::utils::config::{AU_TO_M, DAY_SECONDS, GRAVITATIONAL_CONSTANT, SUN_MASS_KG};

/// Orbital distance from Kepler's third law
///
/// a = cbrt(G * M_star / (4 pi^2) * P^2)
///
/// # Arguments
/// * `stellar_mass_sun` - Host star mass in solar masses
/// * `period_days` - Orbital period in days
///
/// # Returns
/// Semi-major axis in AU, or `None` if the inputs do not give a finite,
/// non-negative distance
pub fn orbital_distance_au(stellar_mass_sun: f64, period_days: f64) -> Option<f64> {
    if stellar_mass_sun < 0.0 || period_days < 0.0 {
        return None;
    }
    let mass_kg = stellar_mass_sun * SUN_MASS_KG;
    let period_s = period_days * DAY_SECONDS;
    let r_m = (GRAVITATIONAL_CONSTANT * mass_kg / (4.0 * PI * PI) * period_s * period_s).cbrt();
    let r_au = r_m / AU_TO_M;
    r_au.is_finite().then_some(r_au)
}

/// Semi-minor axis of an ellipse, b = a * sqrt(1 - e^2)
#[inline]
pub fn semi_minor_axis(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt()
}

/// Farthest orbital distance, a * (1 + e)
#[inline]
pub fn apoapsis(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 + eccentricity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_orbit_is_about_one_au() {
        let a = orbital_distance_au(1.0, 365.25).unwrap();
        assert!((a - 1.0).abs() < 0.01, "got {a}");
    }

    #[test]
    fn test_scales_with_period_two_thirds() {
        let a1 = orbital_distance_au(1.0, 100.0).unwrap();
        let a8 = orbital_distance_au(1.0, 800.0).unwrap();
        // 8^(2/3) = 4
        assert!((a8 / a1 - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(orbital_distance_au(-1.0, 10.0).is_none());
        assert!(orbital_distance_au(1.0, -10.0).is_none());
        assert!(orbital_distance_au(f64::NAN, 10.0).is_none());
    }

    #[test]
    fn test_ellipse_geometry() {
        assert!((semi_minor_axis(2.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((semi_minor_axis(1.0, 0.6) - 0.8).abs() < 1e-12);
        assert!((apoapsis(1.0, 0.2) - 1.2).abs() < 1e-12);
    }
}
