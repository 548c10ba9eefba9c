/// Archive explorer: filtered queries returning post-processed planet records
///
/// Each query is issued fresh and its result set returned by value; the
/// explorer keeps no record of previous results.
use std::cmp::Ordering;
use std::collections::HashSet;

use super::archive::{CatalogSource, NasaExoplanetArchive};
use super::filters::QueryFilters;
use super::record::PlanetRecord;
use crate::error::QueryResult;

pub struct ArchiveExplorer {
    source: Box<dyn CatalogSource>,
}

impl ArchiveExplorer {
    /// Explorer backed by the NASA Exoplanet Archive, configured from the environment
    pub fn new() -> Self {
        Self::with_source(NasaExoplanetArchive::from_env())
    }

    pub fn with_source(source: impl CatalogSource + 'static) -> Self {
        ArchiveExplorer {
            source: Box::new(source),
        }
    }

    pub fn source_name(&self) -> String {
        self.source.name()
    }

    /// Query the catalog and post-process the rows
    ///
    /// Rows get an orbital distance and planet type. Rows from the
    /// per-publication table are deduplicated, keeping the most recently
    /// published row of each planet.
    ///
    /// # Returns
    /// `Ok` with possibly zero records; `Err` if the filters are invalid or
    /// the source fails
    pub fn query_exo(&self, filters: &QueryFilters) -> QueryResult<Vec<PlanetRecord>> {
        let request = filters.to_request()?;
        let rows = self.source.fetch(&request)?;
        let fetched = rows.len();

        let mut records: Vec<PlanetRecord> = rows.into_iter().map(PlanetRecord::from_row).collect();

        if filters.table.has_duplicates() {
            records = deduplicate_latest(records);
            log::info!(
                "Dropped {} duplicate publication rows from {}",
                fetched - records.len(),
                filters.table
            );
        }

        if records.is_empty() {
            log::warn!(
                "No exoplanets matched '{}' in {}",
                request.predicate,
                filters.table
            );
        } else {
            log::info!("Retrieved {} planets from {}", records.len(), self.source.name());
        }

        Ok(records)
    }
}

impl Default for ArchiveExplorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest first, undated rows last
fn compare_pub_date_desc(a: &PlanetRecord, b: &PlanetRecord) -> Ordering {
    match (a.pub_date, b.pub_date) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Keep one record per (host star id, planet name), preferring the latest publication
///
/// The sort is stable, so rows with equal dates keep their archive order.
pub fn deduplicate_latest(mut records: Vec<PlanetRecord>) -> Vec<PlanetRecord> {
    records.sort_by(compare_pub_date_desc);

    let mut seen: HashSet<(Option<String>, String)> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert((r.gaia_id.clone(), r.name.clone())))
        .collect()
}
