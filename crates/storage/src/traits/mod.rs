//! Repository trait abstraction
//!
//! Defines async domain traits for the equality-filtered lookups the
//! presentation layer needs. All operations are read-only and return an
//! empty collection, never an error, when no rows match.

pub mod events;
pub mod flux;
pub mod site;
pub mod stats;

pub use events::{FertilizationStore, TillageStore, TreatmentStore};
pub use flux::FluxStore;
pub use site::SiteStore;
pub use stats::StatsStore;
