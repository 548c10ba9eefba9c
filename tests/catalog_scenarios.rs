//! End-to-end scenarios: archive rows through the explorer and zone evaluator
use habitex::catalog::{parse_archive_json, ArchiveRow, CatalogRequest, CatalogSource};
use habitex::habzone::{evaluate_zone, ZoneColumns};
use habitex::presentation::{mass_radius_series, record_to_row};
use habitex::{
    evaluate_all, ArchiveExplorer, PlanetType, QueryError, QueryFilters, QueryResult, SourceTable,
    ZoneModel, ZoneModelKind,
};

/// Serves a fixed JSON body, like a TAP endpoint would
struct FixtureArchive {
    body: String,
}

impl CatalogSource for FixtureArchive {
    fn fetch(&self, _request: &CatalogRequest) -> QueryResult<Vec<ArchiveRow>> {
        parse_archive_json(&self.body)
    }

    fn name(&self) -> String {
        "FixtureArchive".to_string()
    }
}

fn explorer(body: &str) -> ArchiveExplorer {
    ArchiveExplorer::with_source(FixtureArchive {
        body: body.to_string(),
    })
}

// One solar twin system: planets at ~1 AU and ~2 AU (P = 365.25 * 2^1.5 days)
const SOLAR_TWIN: &str = r#"[
    {"gaia_id": "Gaia DR3 1", "pl_pubdate": "2020-01", "pl_name": "Twin b", "hostname": "Twin",
     "dec": 12.0, "st_mass": 1.0, "pl_orbper": 365.25, "pl_orbsmax": 1.0, "pl_masse": 1.0,
     "pl_msinie": 1.0, "pl_rade": 1.0, "st_teff": 5780, "pl_eqt": 255, "pl_orbeccen": 0.0,
     "pl_dens": 5.5, "st_lum": 0.0},
    {"gaia_id": "Gaia DR3 1", "pl_pubdate": "2020-01", "pl_name": "Twin c", "hostname": "Twin",
     "dec": 12.0, "st_mass": 1.0, "pl_orbper": 1033.08, "pl_orbsmax": 2.0, "pl_masse": 300.0,
     "pl_msinie": 300.0, "pl_rade": 11.0, "st_teff": 5780, "pl_eqt": 180, "pl_orbeccen": 0.0,
     "pl_dens": 1.3, "st_lum": 0.0},
    {"gaia_id": "Gaia DR3 2", "pl_pubdate": "2018-06", "pl_name": "Faint b", "hostname": "Faint",
     "dec": -5.0, "st_mass": 0.5, "pl_orbper": 20.0, "pl_orbsmax": null, "pl_masse": null,
     "pl_msinie": null, "pl_rade": null, "st_teff": 3500, "pl_eqt": null, "pl_orbeccen": 0.1,
     "pl_dens": null, "st_lum": null}
]"#;

#[test]
fn test_earth_analog_in_conservative_zone() {
    let records = explorer(SOLAR_TWIN).query_exo(&QueryFilters::new()).unwrap();
    let annotated = evaluate_zone(&records, &ZoneModel::CONSERVATIVE);

    let earth = &annotated[0];
    assert!((earth.orbital_distance.unwrap() - 1.0).abs() < 1e-3);
    assert!(earth.in_zone(ZoneModelKind::Conservative));
}

#[test]
fn test_two_au_outside_conservative_zone() {
    let records = explorer(SOLAR_TWIN).query_exo(&QueryFilters::new()).unwrap();
    let annotated = evaluate_zone(&records, &ZoneModel::CONSERVATIVE);

    let cold = &annotated[1];
    assert!((cold.orbital_distance.unwrap() - 2.0).abs() < 1e-3);
    assert!(!cold.in_zone(ZoneModelKind::Conservative));
    assert!(cold.zone(ZoneModelKind::Conservative).outer_radius_au < 2.0);
}

#[test]
fn test_missing_luminosity_keeps_sentinel() {
    let records = explorer(SOLAR_TWIN).query_exo(&QueryFilters::new()).unwrap();
    let annotated = evaluate_all(&records);

    let faint = &annotated[2];
    assert!(faint.orbital_distance.is_some());
    for kind in ZoneModelKind::ALL {
        let zone = faint.zone(kind);
        assert!(!zone.in_zone);
        assert!(zone.inner_radius_au.is_nan());
    }
    // The others were still evaluated
    assert!(annotated[0].in_zone(ZoneModelKind::Optimistic));
}

#[test]
fn test_density_classification() {
    let records = explorer(SOLAR_TWIN).query_exo(&QueryFilters::new()).unwrap();
    assert_eq!(records[0].planet_type, Some(PlanetType::Rocky));
    assert_eq!(records[1].planet_type, Some(PlanetType::Gas));
    assert_eq!(records[2].planet_type, None);

    assert_eq!(PlanetType::from_density_ratio(0.35), Some(PlanetType::Gas));
    assert_eq!(PlanetType::from_density_ratio(0.55), Some(PlanetType::WaterWorld));
    assert_eq!(PlanetType::from_density_ratio(0.85), Some(PlanetType::Rocky));
}

#[test]
fn test_duplicate_publications_keep_latest() {
    let body = r#"[
        {"gaia_id": "Kepler-1", "pl_pubdate": "2013-02", "pl_name": "b", "hostname": "Kepler-1",
         "st_mass": 1.0, "pl_orbper": 300.0, "pl_orbeccen": 0.01, "st_teff": 5700, "st_lum": 0.0},
        {"gaia_id": "Kepler-1", "pl_pubdate": "2021-11", "pl_name": "b", "hostname": "Kepler-1",
         "st_mass": 1.0, "pl_orbper": 310.0, "pl_orbeccen": 0.02, "st_teff": 5750, "st_lum": 0.0}
    ]"#;
    let filters = QueryFilters::new().table(SourceTable::PlanetarySystems);
    let records = explorer(body).query_exo(&filters).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].orbital_period, Some(310.0));
    assert_eq!(records[0].stellar_teff, Some(5750.0));
}

#[test]
fn test_empty_result_is_not_an_error() {
    let records = explorer("[]").query_exo(&QueryFilters::new().hostname("Nowhere")).unwrap();
    assert!(records.is_empty());
    assert!(evaluate_all(&records).is_empty());
}

#[test]
fn test_malformed_body_is_query_error() {
    let result = explorer("Internal Server Error").query_exo(&QueryFilters::new());
    assert!(matches!(result, Err(QueryError::Malformed(_))));
}

#[test]
fn test_presentation_outputs() {
    let records = explorer(SOLAR_TWIN).query_exo(&QueryFilters::new()).unwrap();
    let annotated = evaluate_all(&records);

    let cols = ZoneColumns::from_records(&annotated, ZoneModelKind::Conservative);
    assert_eq!(cols.len(), 3);
    assert_eq!(cols.count_in_zone(), 1);

    let series = mass_radius_series(&annotated, ZoneModelKind::Conservative);
    assert_eq!(series.names, vec!["Twin b".to_string()]);

    let row = record_to_row(&annotated[1]);
    assert_eq!(row["pl_type"], "Gas planets");
    assert_eq!(row["In Conservative Habitable Zone"], false);
}
