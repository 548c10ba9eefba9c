/// Flux boundary models for the habitable zone
///
/// Each boundary is a fourth-order polynomial in the star's temperature
/// offset from the Sun (Kopparapu et al. 2013). A model pairs an inner and
/// an outer boundary. The two built-in models differ only in their
/// coefficients; custom tables can be deserialized from JSON.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::config::SOLAR_TEFF_K;

/// Coefficients of one flux boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxBoundary {
    /// Boundary flux for a Sun-like star (S_eff,sun)
    pub s0: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl FluxBoundary {
    pub const fn new(s0: f64, a: f64, b: f64, c: f64, d: f64) -> Self {
        FluxBoundary { s0, a, b, c, d }
    }

    /// Boundary flux for a circular orbit around a star `t_star` K hotter than the Sun
    pub fn circular_flux(&self, t_star: f64) -> f64 {
        self.s0
            + self.a * t_star
            + self.b * t_star.powi(2)
            + self.c * t_star.powi(3)
            + self.d * t_star.powi(4)
    }

    /// Boundary flux corrected for orbital eccentricity.
    ///
    /// The orbit-averaged flux grows as 1/sqrt(1 - e^2), so the threshold does too.
    pub fn flux(&self, t_star: f64, eccentricity: f64) -> f64 {
        self.circular_flux(t_star) / (1.0 - eccentricity * eccentricity).sqrt()
    }
}

/// Which built-in model to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneModelKind {
    /// Runaway greenhouse (inner) to maximum greenhouse (outer)
    Conservative,
    /// Recent Venus (inner) to early Mars (outer)
    Optimistic,
}

impl ZoneModelKind {
    pub const ALL: [ZoneModelKind; 2] = [ZoneModelKind::Conservative, ZoneModelKind::Optimistic];

    pub fn label(&self) -> &'static str {
        match self {
            ZoneModelKind::Conservative => "Conservative",
            ZoneModelKind::Optimistic => "Optimistic",
        }
    }

    pub fn model(&self) -> ZoneModel {
        match self {
            ZoneModelKind::Conservative => ZoneModel::CONSERVATIVE,
            ZoneModelKind::Optimistic => ZoneModel::OPTIMISTIC,
        }
    }

    pub fn inner_radius_column(&self) -> String {
        format!("{} Inner Radius (AU)", self.label())
    }

    pub fn outer_radius_column(&self) -> String {
        format!("{} Outer Radius (AU)", self.label())
    }

    pub fn membership_column(&self) -> String {
        format!("In {} Habitable Zone", self.label())
    }
}

impl fmt::Display for ZoneModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Boundary fluxes for one star/orbit combination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryFluxes {
    pub inner: f64,
    pub outer: f64,
}

/// Inner and outer flux boundaries of a habitable zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneModel {
    pub kind: ZoneModelKind,
    pub inner: FluxBoundary,
    pub outer: FluxBoundary,
}

impl ZoneModel {
    pub const CONSERVATIVE: ZoneModel = ZoneModel {
        kind: ZoneModelKind::Conservative,
        inner: FluxBoundary::new(1.0512, 1.3242e-4, 1.5418e-8, -7.9895e-12, -1.8328e-15),
        outer: FluxBoundary::new(0.3438, 5.8942e-5, 1.6558e-9, -3.0045e-12, -5.2983e-16),
    };

    pub const OPTIMISTIC: ZoneModel = ZoneModel {
        kind: ZoneModelKind::Optimistic,
        inner: FluxBoundary::new(1.7753, 1.4316e-4, 2.9875e-9, -7.5702e-12, -1.1635e-15),
        outer: FluxBoundary::new(0.3179, 5.4513e-5, 1.5313e-9, -2.7786e-12, -4.8997e-16),
    };

    /// Boundary fluxes for a star of effective temperature `t_eff` (K) and
    /// an orbit of eccentricity `eccentricity`
    pub fn boundary_fluxes(&self, t_eff: f64, eccentricity: f64) -> BoundaryFluxes {
        let t_star = t_eff - SOLAR_TEFF_K;
        BoundaryFluxes {
            inner: self.inner.flux(t_star, eccentricity),
            outer: self.outer.flux(t_star, eccentricity),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<ZoneModelKind> for ZoneModel {
    fn from(kind: ZoneModelKind) -> Self {
        kind.model()
    }
}
