//! Columnar view of zone annotations

use ndarray::Array1;

use super::model::ZoneModelKind;
use crate::catalog::PlanetRecord;

/// One model's annotations as aligned columns, one entry per record
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneColumns {
    pub kind: ZoneModelKind,
    pub inner_radius_au: Array1<f64>,
    pub outer_radius_au: Array1<f64>,
    pub in_zone: Array1<bool>,
}

impl ZoneColumns {
    /// Collect columns from annotated records. Records never evaluated for
    /// `kind` contribute NaN / false.
    pub fn from_records(records: &[PlanetRecord], kind: ZoneModelKind) -> Self {
        let n = records.len();
        let mut inner_radius_au = Array1::<f64>::from_elem(n, f64::NAN);
        let mut outer_radius_au = Array1::<f64>::from_elem(n, f64::NAN);
        let mut in_zone = Array1::<bool>::from_elem(n, false);

        for (i, record) in records.iter().enumerate() {
            let zone = record.zone(kind);
            inner_radius_au[i] = zone.inner_radius_au;
            outer_radius_au[i] = zone.outer_radius_au;
            in_zone[i] = zone.in_zone;
        }

        ZoneColumns {
            kind,
            inner_radius_au,
            outer_radius_au,
            in_zone,
        }
    }

    pub fn len(&self) -> usize {
        self.in_zone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_zone.is_empty()
    }

    pub fn count_in_zone(&self) -> usize {
        self.in_zone.iter().filter(|&&b| b).count()
    }

    /// Named columns in display order
    pub fn named_radii(&self) -> [(String, &Array1<f64>); 2] {
        [
            (self.kind.inner_radius_column(), &self.inner_radius_au),
            (self.kind.outer_radius_column(), &self.outer_radius_au),
        ]
    }
}
