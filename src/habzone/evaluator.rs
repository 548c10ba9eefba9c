/// Habitable zone evaluation for planet records
///
/// Every record is evaluated independently: the annotation depends only on
/// the record's own stellar temperature, luminosity, eccentricity and
/// orbital distance. Records missing any of these keep the unset sentinel
/// (NaN radii, not in zone).
use serde::Serialize;

use super::model::{ZoneModel, ZoneModelKind};
use crate::catalog::PlanetRecord;

/// Inner/outer boundary radii and membership for one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneAnnotation {
    pub inner_radius_au: f64,
    pub outer_radius_au: f64,
    pub in_zone: bool,
}

impl ZoneAnnotation {
    pub const UNSET: ZoneAnnotation = ZoneAnnotation {
        inner_radius_au: f64::NAN,
        outer_radius_au: f64::NAN,
        in_zone: false,
    };

    pub fn is_set(&self) -> bool {
        self.inner_radius_au.is_finite() && self.outer_radius_au.is_finite()
    }
}

impl Default for ZoneAnnotation {
    fn default() -> Self {
        ZoneAnnotation::UNSET
    }
}

/// Per-model annotations attached to a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HabitableZones {
    pub conservative: Option<ZoneAnnotation>,
    pub optimistic: Option<ZoneAnnotation>,
}

impl HabitableZones {
    pub fn get(&self, kind: ZoneModelKind) -> Option<ZoneAnnotation> {
        match kind {
            ZoneModelKind::Conservative => self.conservative,
            ZoneModelKind::Optimistic => self.optimistic,
        }
    }

    pub fn set(&mut self, kind: ZoneModelKind, annotation: ZoneAnnotation) {
        match kind {
            ZoneModelKind::Conservative => self.conservative = Some(annotation),
            ZoneModelKind::Optimistic => self.optimistic = Some(annotation),
        }
    }
}

/// Physical inputs the zone computation needs from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneInputs {
    /// Stellar effective temperature (K)
    pub t_eff: f64,
    /// log10(L / L_sun)
    pub log_lum: f64,
    pub eccentricity: f64,
    /// Orbital distance (AU)
    pub orbital_distance: f64,
}

impl ZoneInputs {
    /// Pull the inputs from a record; `None` if any is missing
    pub fn from_record(record: &PlanetRecord) -> Option<Self> {
        Some(ZoneInputs {
            t_eff: record.stellar_teff?,
            log_lum: record.stellar_log_lum?,
            eccentricity: record.eccentricity?,
            orbital_distance: record.orbital_distance?,
        })
    }

    fn is_finite(&self) -> bool {
        self.t_eff.is_finite()
            && self.log_lum.is_finite()
            && self.eccentricity.is_finite()
            && self.orbital_distance.is_finite()
    }
}

/// Stellar flux received by the planet relative to Earth
pub fn planet_flux(log_lum: f64, orbital_distance: f64) -> f64 {
    10f64.powf(log_lum) / (orbital_distance * orbital_distance)
}

/// Evaluate one set of inputs against a model
pub fn evaluate_inputs(model: &ZoneModel, inputs: &ZoneInputs) -> ZoneAnnotation {
    if !inputs.is_finite() || !(0.0..1.0).contains(&inputs.eccentricity) {
        return ZoneAnnotation::UNSET;
    }

    let luminosity = 10f64.powf(inputs.log_lum);
    let s_pl = planet_flux(inputs.log_lum, inputs.orbital_distance);
    let fluxes = model.boundary_fluxes(inputs.t_eff, inputs.eccentricity);

    let inner_radius_au = (luminosity / fluxes.inner).sqrt();
    let outer_radius_au = (luminosity / fluxes.outer).sqrt();

    // NaN compares false, but infinities and a non-positive outer flux do not
    let in_zone = s_pl.is_finite()
        && fluxes.inner.is_finite()
        && fluxes.outer.is_finite()
        && fluxes.outer > 0.0
        && fluxes.outer < s_pl
        && s_pl < fluxes.inner;

    ZoneAnnotation {
        inner_radius_au,
        outer_radius_au,
        in_zone,
    }
}

/// Evaluate a single record; incomplete records get the unset sentinel
pub fn evaluate_record(model: &ZoneModel, record: &PlanetRecord) -> ZoneAnnotation {
    match ZoneInputs::from_record(record) {
        Some(inputs) => evaluate_inputs(model, &inputs),
        None => ZoneAnnotation::UNSET,
    }
}

/// Annotate records with a model's habitable zone.
///
/// Returns new records; the input slice is left untouched. Other models'
/// annotations already on the records are kept.
pub fn evaluate_zone(records: &[PlanetRecord], model: &ZoneModel) -> Vec<PlanetRecord> {
    let annotated: Vec<PlanetRecord> = records
        .iter()
        .map(|record| {
            let mut out = record.clone();
            out.zones.set(model.kind, evaluate_record(model, record));
            out
        })
        .collect();

    log::debug!(
        "{} habitable zone: {} of {} records in zone",
        model.kind,
        annotated.iter().filter(|r| r.in_zone(model.kind)).count(),
        annotated.len()
    );
    annotated
}

/// Annotate records with both built-in models
pub fn evaluate_all(records: &[PlanetRecord]) -> Vec<PlanetRecord> {
    ZoneModelKind::ALL
        .iter()
        .fold(records.to_vec(), |acc, kind| evaluate_zone(&acc, &kind.model()))
}
