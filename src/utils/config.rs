//! Physical constants, catalog settings and archive endpoint configuration
//!
//! Endpoint settings are resolved once from the environment (a `.env` file
//! in the working directory is honored) and can be overridden per explorer
//! with an explicit [`ArchiveConfig`].

use once_cell::sync::Lazy;
use std::time::Duration;

use crate::error::{QueryError, QueryResult};

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;
/// Solar mass in kg
pub const SUN_MASS_KG: f64 = 1.989e30;
/// 1 AU in meters
pub const AU_TO_M: f64 = 1.496e11;
/// Day in seconds
pub const DAY_SECONDS: f64 = 86400.0;

/// Solar effective temperature used as the zero point of the flux polynomials (K)
pub const SOLAR_TEFF_K: f64 = 5780.0;

/// Upper eccentricity bound applied to every catalog query.
/// The flux boundary fits are unreliable above it.
pub const MAX_ECCENTRICITY: f64 = 0.3;

/// Reference bulk density for planet type classification (Earth, g/cm^3)
pub const EARTH_DENSITY_G_CM3: f64 = 5.514;

/// Density ratio below which a planet is classified as a gas planet
pub const GAS_PLANET_MAX_RATIO: f64 = 0.4;
/// Density ratio below which a non-gas planet is classified as a water world
pub const WATER_WORLD_MAX_RATIO: f64 = 0.7;

/// Columns requested from the archive, in order
pub const ARCHIVE_COLUMNS: [&str; 16] = [
    "gaia_id",
    "pl_pubdate",
    "pl_name",
    "hostname",
    "dec",
    "st_mass",
    "pl_orbper",
    "pl_orbsmax",
    "pl_masse",
    "pl_msinie",
    "pl_rade",
    "st_teff",
    "pl_eqt",
    "pl_orbeccen",
    "pl_dens",
    "st_lum",
];

/// NASA Exoplanet Archive TAP synchronous endpoint
pub const DEFAULT_ARCHIVE_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

pub const ARCHIVE_URL_ENV: &str = "HABITEX_ARCHIVE_URL";
pub const HTTP_TIMEOUT_ENV: &str = "HABITEX_HTTP_TIMEOUT_SECS";

/// Archive endpoint settings
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ArchiveConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        ArchiveConfig {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Build a config from environment variables, falling back to the defaults
    /// for anything unset. Loads `.env` first if present.
    pub fn from_env() -> QueryResult<Self> {
        let _ = dotenvy::dotenv();

        let base_url = std::env::var(ARCHIVE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ARCHIVE_URL.to_string());

        let timeout_secs = match std::env::var(HTTP_TIMEOUT_ENV) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                QueryError::Config(format!("{HTTP_TIMEOUT_ENV} must be whole seconds, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(ArchiveConfig::new(base_url, Duration::from_secs(timeout_secs)))
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig::new(
            DEFAULT_ARCHIVE_URL,
            Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        )
    }
}

/// Process-wide config resolved from the environment on first use.
/// An invalid environment falls back to the defaults with a warning.
pub static ARCHIVE_CONFIG: Lazy<ArchiveConfig> = Lazy::new(|| {
    ArchiveConfig::from_env().unwrap_or_else(|e| {
        log::warn!("Ignoring archive environment settings: {e}");
        ArchiveConfig::default()
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_tap_sync() {
        let cfg = ArchiveConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_ARCHIVE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_column_list_has_no_duplicates() {
        let mut cols = ARCHIVE_COLUMNS.to_vec();
        cols.sort_unstable();
        cols.dedup();
        assert_eq!(cols.len(), ARCHIVE_COLUMNS.len());
    }
}
