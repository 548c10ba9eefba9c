//! Plot-ready data derived from annotated records
//!
//! Rendering lives outside this crate; these helpers compute what a plot of
//! the zone annuli, a planet's orbit or the mass-radius diagram needs.

use ndarray::Array1;
use serde_json::{Map, Value};

use crate::catalog::PlanetRecord;
use crate::habzone::ZoneModelKind;
use crate::utils::orbital::{apoapsis, semi_minor_axis};

/// Margin applied around the largest radius when framing a system plot
pub const PLOT_MARGIN: f64 = 1.2;

/// Radial extent of a habitable zone annulus across a record set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneExtent {
    pub kind: ZoneModelKind,
    /// Smallest inner radius (AU)
    pub inner_au: f64,
    /// Largest outer radius (AU)
    pub outer_au: f64,
}

impl ZoneExtent {
    /// `None` if no record carries a finite annotation for `kind`
    pub fn from_records(records: &[PlanetRecord], kind: ZoneModelKind) -> Option<Self> {
        let zones: Vec<_> = records
            .iter()
            .filter_map(|r| r.zones.get(kind))
            .filter(|z| z.is_set())
            .collect();
        if zones.is_empty() {
            return None;
        }
        let inner_au = zones.iter().map(|z| z.inner_radius_au).fold(f64::INFINITY, f64::min);
        let outer_au = zones
            .iter()
            .map(|z| z.outer_radius_au)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(ZoneExtent {
            kind,
            inner_au,
            outer_au,
        })
    }

    pub fn width_au(&self) -> f64 {
        self.outer_au - self.inner_au
    }
}

/// Ellipse parameters of a planet orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
    pub eccentricity: f64,
    pub apoapsis: f64,
}

impl OrbitGeometry {
    pub fn new(semi_major_axis: f64, eccentricity: f64) -> Self {
        OrbitGeometry {
            semi_major_axis,
            semi_minor_axis: semi_minor_axis(semi_major_axis, eccentricity),
            eccentricity,
            apoapsis: apoapsis(semi_major_axis, eccentricity),
        }
    }

    /// Orbit from the catalogued semi-major axis, falling back to the Kepler
    /// distance. A missing eccentricity is taken as circular.
    pub fn from_record(record: &PlanetRecord) -> Option<Self> {
        let sma = record.semi_major_axis.or(record.orbital_distance)?;
        Some(Self::new(sma, record.eccentricity.unwrap_or(0.0)))
    }
}

/// Half-width of a square plot that holds every zone annulus and the orbit
pub fn plot_half_width(extents: &[ZoneExtent], orbit: &OrbitGeometry) -> f64 {
    let max_radius = extents
        .iter()
        .map(|e| e.outer_au)
        .fold(orbit.apoapsis, f64::max);
    PLOT_MARGIN * max_radius
}

/// Mass-radius diagram points for planets inside a zone
#[derive(Debug, Clone, PartialEq)]
pub struct MassRadiusSeries {
    pub kind: ZoneModelKind,
    pub names: Vec<String>,
    /// M sin i (Earth masses)
    pub min_mass: Array1<f64>,
    /// Radius (Earth radii)
    pub radius: Array1<f64>,
    /// Host T_eff (K), NaN where unknown
    pub t_eff: Array1<f64>,
}

impl MassRadiusSeries {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Collect in-zone planets that have both a minimum mass and a radius
pub fn mass_radius_series(records: &[PlanetRecord], kind: ZoneModelKind) -> MassRadiusSeries {
    let points: Vec<(&PlanetRecord, f64, f64)> = records
        .iter()
        .filter(|r| r.in_zone(kind))
        .filter_map(|r| Some((r, r.min_mass?, r.radius?)))
        .collect();

    MassRadiusSeries {
        kind,
        names: points.iter().map(|(r, _, _)| r.name.clone()).collect(),
        min_mass: points.iter().map(|&(_, m, _)| m).collect(),
        radius: points.iter().map(|&(_, _, rad)| rad).collect(),
        t_eff: points
            .iter()
            .map(|(r, _, _)| r.stellar_teff.unwrap_or(f64::NAN))
            .collect(),
    }
}

fn number(v: Option<f64>) -> Value {
    v.and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Flat row keyed by archive column names, derived columns and zone column names.
/// Missing or NaN values become `null`.
pub fn record_to_row(record: &PlanetRecord) -> Map<String, Value> {
    let mut row = Map::new();
    row.insert("gaia_id".into(), record.gaia_id.clone().map_or(Value::Null, Value::String));
    row.insert(
        "pl_pubdate".into(),
        record
            .pub_date
            .map_or(Value::Null, |d| Value::String(d.format("%Y-%m-%d").to_string())),
    );
    row.insert("pl_name".into(), Value::String(record.name.clone()));
    row.insert("hostname".into(), Value::String(record.hostname.clone()));
    row.insert("dec".into(), number(record.dec));
    row.insert("st_mass".into(), number(record.stellar_mass));
    row.insert("pl_orbper".into(), number(record.orbital_period));
    row.insert("pl_orbsmax".into(), number(record.semi_major_axis));
    row.insert("pl_masse".into(), number(record.mass));
    row.insert("pl_msinie".into(), number(record.min_mass));
    row.insert("pl_rade".into(), number(record.radius));
    row.insert("st_teff".into(), number(record.stellar_teff));
    row.insert("pl_eqt".into(), number(record.eq_temperature));
    row.insert("pl_orbeccen".into(), number(record.eccentricity));
    row.insert("pl_dens".into(), number(record.density));
    row.insert("st_lum".into(), number(record.stellar_log_lum));
    row.insert("pl_orbdist".into(), number(record.orbital_distance));
    row.insert(
        "pl_type".into(),
        record
            .planet_type
            .map_or(Value::Null, |t| Value::String(t.label().to_string())),
    );

    for kind in ZoneModelKind::ALL {
        if let Some(zone) = record.zones.get(kind) {
            row.insert(kind.inner_radius_column(), number(Some(zone.inner_radius_au)));
            row.insert(kind.outer_radius_column(), number(Some(zone.outer_radius_au)));
            row.insert(kind.membership_column(), Value::Bool(zone.in_zone));
        }
    }
    row
}
