//! Habitable zone boundaries and membership
//!
//! Conservative and optimistic zones share one algorithm and differ only in
//! their flux coefficient tables.

pub mod columns;
pub mod evaluator;
pub mod model;

pub use columns::ZoneColumns;
pub use evaluator::{
    evaluate_all, evaluate_inputs, evaluate_record, evaluate_zone, planet_flux, HabitableZones,
    ZoneAnnotation, ZoneInputs,
};
pub use model::{BoundaryFluxes, FluxBoundary, ZoneModel, ZoneModelKind};
