//! Exoplanet catalog access
//!
//! Builds filtered archive requests, fetches rows through a [`CatalogSource`]
//! and derives orbital distance, planet type and per-planet deduplication.

pub mod archive;
pub mod explorer;
pub mod filters;
pub mod record;

pub use archive::{parse_archive_json, CatalogSource, NasaExoplanetArchive};
pub use explorer::{deduplicate_latest, ArchiveExplorer};
pub use filters::{CatalogRequest, QueryFilters, Range, SourceTable};
pub use record::{parse_pub_date, ArchiveRow, PlanetRecord, PlanetType};
