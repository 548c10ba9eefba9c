//! Property tests for the habitable zone evaluator
use habitex::catalog::ArchiveRow;
use habitex::habzone::{evaluate_all, evaluate_zone, ZoneModel, ZoneModelKind};
use habitex::PlanetRecord;
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = PlanetRecord> {
    (
        "[a-z]{1,6}",
        prop::option::of(2600.0..7200.0f64),
        prop::option::of(-3.0..2.0f64),
        prop::option::of(0.0..0.3f64),
        prop::option::of(0.1..3.0f64),
        prop::option::of(0.5..2000.0f64),
    )
        .prop_map(|(name, teff, lum, ecc, mass, period)| {
            PlanetRecord::from_row(ArchiveRow {
                pl_name: Some(name),
                hostname: Some("host".to_string()),
                st_teff: teff,
                st_lum: lum,
                pl_orbeccen: ecc,
                st_mass: mass,
                pl_orbper: period,
                ..Default::default()
            })
        })
}

fn zone_bits(record: &PlanetRecord, kind: ZoneModelKind) -> (u64, u64, bool) {
    let zone = record.zone(kind);
    (
        zone.inner_radius_au.to_bits(),
        zone.outer_radius_au.to_bits(),
        zone.in_zone,
    )
}

proptest! {
    #[test]
    fn prop_solar_twin_flux_is_s0(kind in prop::sample::select(ZoneModelKind::ALL.to_vec())) {
        let model = kind.model();
        let fluxes = model.boundary_fluxes(5780.0, 0.0);
        prop_assert_eq!(fluxes.inner, model.inner.s0);
        prop_assert_eq!(fluxes.outer, model.outer.s0);
    }

    #[test]
    fn prop_outer_flux_below_inner_flux(
        teff in 2600.0..7200.0f64,
        ecc in 0.0..0.3f64,
    ) {
        for model in [ZoneModel::CONSERVATIVE, ZoneModel::OPTIMISTIC] {
            let fluxes = model.boundary_fluxes(teff, ecc);
            prop_assert!(fluxes.outer < fluxes.inner);
        }
    }

    #[test]
    fn prop_eccentricity_raises_boundary_flux(
        teff in 2600.0..7200.0f64,
        ecc in 0.0..0.29f64,
        step in 0.001..0.01f64,
    ) {
        for model in [ZoneModel::CONSERVATIVE, ZoneModel::OPTIMISTIC] {
            let low = model.boundary_fluxes(teff, ecc);
            let high = model.boundary_fluxes(teff, ecc + step);
            prop_assert!(high.inner > low.inner);
            prop_assert!(high.outer > low.outer);
        }
    }

    #[test]
    fn prop_evaluation_is_idempotent(records in prop::collection::vec(record_strategy(), 0..20)) {
        let once = evaluate_all(&records);
        let twice = evaluate_all(&once);
        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            for kind in ZoneModelKind::ALL {
                prop_assert_eq!(zone_bits(a, kind), zone_bits(b, kind));
            }
        }
    }

    #[test]
    fn prop_evaluation_is_order_independent(
        records in prop::collection::vec(record_strategy(), 1..20),
        rotate in 0usize..20,
    ) {
        let forward = evaluate_zone(&records, &ZoneModel::CONSERVATIVE);

        let mut shuffled = records.clone();
        shuffled.reverse();
        let k = rotate % shuffled.len();
        shuffled.rotate_left(k);
        let evaluated = evaluate_zone(&shuffled, &ZoneModel::CONSERVATIVE);

        let n = records.len();
        for (j, record) in evaluated.iter().enumerate() {
            // shuffled[j] == records[n - 1 - (j + k) % n]
            let unshuffled = &forward[n - 1 - (j + k) % n];
            prop_assert_eq!(&record.name, &unshuffled.name);
            prop_assert_eq!(
                zone_bits(record, ZoneModelKind::Conservative),
                zone_bits(unshuffled, ZoneModelKind::Conservative)
            );
        }
    }

    #[test]
    fn prop_incomplete_records_never_in_zone(records in prop::collection::vec(record_strategy(), 0..20)) {
        for record in evaluate_all(&records) {
            let complete = record.stellar_teff.is_some()
                && record.stellar_log_lum.is_some()
                && record.eccentricity.is_some()
                && record.orbital_distance.is_some();
            if !complete {
                for kind in ZoneModelKind::ALL {
                    let zone = record.zone(kind);
                    prop_assert!(!zone.in_zone);
                    prop_assert!(zone.inner_radius_au.is_nan());
                    prop_assert!(zone.outer_radius_au.is_nan());
                }
            }
        }
    }

    #[test]
    fn prop_membership_matches_radius_bounds(records in prop::collection::vec(record_strategy(), 0..20)) {
        for record in evaluate_zone(&records, &ZoneModel::OPTIMISTIC) {
            let zone = record.zone(ZoneModelKind::Optimistic);
            if zone.in_zone {
                let a = record.orbital_distance.unwrap();
                prop_assert!(zone.inner_radius_au <= a * (1.0 + 1e-9));
                prop_assert!(a <= zone.outer_radius_au * (1.0 + 1e-9));
            }
        }
    }
}
