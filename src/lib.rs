//! Habitable zone evaluation for catalogued exoplanets
//!
//! Query the NASA Exoplanet Archive with [`ArchiveExplorer`], then annotate
//! the returned [`PlanetRecord`]s with conservative and optimistic habitable
//! zone boundaries using [`evaluate_zone`] or [`evaluate_all`].

// Module declarations
pub mod catalog;
pub mod error;
pub mod habzone;
pub mod presentation;
pub mod utils;

// Re-export public API
pub use catalog::{
    ArchiveExplorer, CatalogRequest, CatalogSource, NasaExoplanetArchive, PlanetRecord,
    PlanetType, QueryFilters, Range, SourceTable,
};
pub use error::{QueryError, QueryResult};
pub use habzone::{
    evaluate_all, evaluate_zone, ZoneAnnotation, ZoneColumns, ZoneModel, ZoneModelKind,
};
pub use utils::config::ArchiveConfig;
