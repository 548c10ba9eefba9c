//! Planet records as returned by the archive, plus derived columns

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::habzone::{HabitableZones, ZoneAnnotation, ZoneModelKind};
use crate::utils::config::{EARTH_DENSITY_G_CM3, GAS_PLANET_MAX_RATIO, WATER_WORLD_MAX_RATIO};
use crate::utils::orbital::orbital_distance_au;

/// One row of the archive response, keyed by archive column name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveRow {
    pub gaia_id: Option<String>,
    pub pl_pubdate: Option<String>,
    pub pl_name: Option<String>,
    pub hostname: Option<String>,
    pub dec: Option<f64>,
    pub st_mass: Option<f64>,
    pub pl_orbper: Option<f64>,
    pub pl_orbsmax: Option<f64>,
    pub pl_masse: Option<f64>,
    pub pl_msinie: Option<f64>,
    pub pl_rade: Option<f64>,
    pub st_teff: Option<f64>,
    pub pl_eqt: Option<f64>,
    pub pl_orbeccen: Option<f64>,
    pub pl_dens: Option<f64>,
    pub st_lum: Option<f64>,
}

/// Planet type from bulk density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    #[serde(rename = "Gas planets")]
    Gas,
    #[serde(rename = "Water worlds")]
    WaterWorld,
    #[serde(rename = "Rocky planets")]
    Rocky,
}

impl PlanetType {
    /// Classify from a dimensionless density ratio (planet / reference).
    /// A NaN ratio has no classification.
    pub fn from_density_ratio(ratio: f64) -> Option<Self> {
        if ratio.is_nan() {
            None
        } else if ratio < GAS_PLANET_MAX_RATIO {
            Some(PlanetType::Gas)
        } else if ratio < WATER_WORLD_MAX_RATIO {
            Some(PlanetType::WaterWorld)
        } else {
            Some(PlanetType::Rocky)
        }
    }

    /// Classify from bulk density in g/cm^3 against Earth's density
    pub fn from_density(density_g_cm3: f64) -> Option<Self> {
        Self::from_density_ratio(density_g_cm3 / EARTH_DENSITY_G_CM3)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanetType::Gas => "Gas planets",
            PlanetType::WaterWorld => "Water worlds",
            PlanetType::Rocky => "Rocky planets",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse an archive publication date.
///
/// The archive reports `YYYY-MM` for most rows; full dates and bare years
/// also occur. Month-only dates resolve to the first of the month.
pub fn parse_pub_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d"))
        .ok()
}

/// A catalogued planet with its host star parameters and derived columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetRecord {
    /// Gaia identifier of the host star
    pub gaia_id: Option<String>,
    pub pub_date: Option<NaiveDate>,
    pub name: String,
    pub hostname: String,
    /// Declination (deg)
    pub dec: Option<f64>,
    /// Stellar mass (M_sun)
    pub stellar_mass: Option<f64>,
    /// Stellar effective temperature (K)
    pub stellar_teff: Option<f64>,
    /// Stellar luminosity, log10(L / L_sun)
    pub stellar_log_lum: Option<f64>,
    /// Orbital period (days)
    pub orbital_period: Option<f64>,
    pub eccentricity: Option<f64>,
    /// Catalogued semi-major axis (AU)
    pub semi_major_axis: Option<f64>,
    /// Planet mass (Earth masses)
    pub mass: Option<f64>,
    /// Minimum mass, M sin i (Earth masses)
    pub min_mass: Option<f64>,
    /// Planet radius (Earth radii)
    pub radius: Option<f64>,
    /// Equilibrium temperature (K)
    pub eq_temperature: Option<f64>,
    /// Bulk density (g/cm^3)
    pub density: Option<f64>,

    /// Orbital distance from Kepler's third law (AU)
    pub orbital_distance: Option<f64>,
    pub planet_type: Option<PlanetType>,
    pub zones: HabitableZones,
}

impl PlanetRecord {
    /// Build a record from an archive row and compute the derived columns
    pub fn from_row(row: ArchiveRow) -> Self {
        let orbital_distance = match (row.st_mass, row.pl_orbper) {
            (Some(mass), Some(period)) => orbital_distance_au(mass, period),
            _ => None,
        };
        let planet_type = row.pl_dens.and_then(PlanetType::from_density);
        let pub_date = row.pl_pubdate.as_deref().and_then(parse_pub_date);

        PlanetRecord {
            gaia_id: row.gaia_id,
            pub_date,
            name: row.pl_name.unwrap_or_default(),
            hostname: row.hostname.unwrap_or_default(),
            dec: row.dec,
            stellar_mass: row.st_mass,
            stellar_teff: row.st_teff,
            stellar_log_lum: row.st_lum,
            orbital_period: row.pl_orbper,
            eccentricity: row.pl_orbeccen,
            semi_major_axis: row.pl_orbsmax,
            mass: row.pl_masse,
            min_mass: row.pl_msinie,
            radius: row.pl_rade,
            eq_temperature: row.pl_eqt,
            density: row.pl_dens,
            orbital_distance,
            planet_type,
            zones: HabitableZones::default(),
        }
    }

    /// Key identifying the same planet across publications
    pub fn identity(&self) -> (Option<&str>, &str) {
        (self.gaia_id.as_deref(), self.name.as_str())
    }

    /// Zone annotation for a model, or the unset sentinel if not evaluated
    pub fn zone(&self, kind: ZoneModelKind) -> ZoneAnnotation {
        self.zones.get(kind).unwrap_or(ZoneAnnotation::UNSET)
    }

    pub fn in_zone(&self, kind: ZoneModelKind) -> bool {
        self.zone(kind).in_zone
    }
}
