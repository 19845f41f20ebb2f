//! Storage layer for fieldflux
//!
//! Read-only sqlx/PostgreSQL access to the field-trial tables (site,
//! fertilization, treatment, tillage, flux). The site table carries a
//! PostGIS `geometry(Point, 4326)` column which is decoded through
//! `fieldflux_core::geometry`.

mod error;
mod pg_store;
mod schema;
pub mod traits;
mod types;

pub use error::StoreError;
pub use pg_store::PgStore;
pub use types::StoreStats;
