//! Core types for fieldflux
//!
//! This crate contains domain types shared across all other crates:
//! field-trial entities, EWKB point decoding, and flux timeline aggregation.

mod constants;
mod env_config;
mod flux;
pub mod geometry;
mod records;
mod site;
pub mod timeline;

pub use constants::*;
pub use env_config::*;
pub use flux::*;
pub use geometry::{GeometryError, PointCoords, decode_ewkb_point};
pub use records::*;
pub use site::*;
pub use timeline::TimelineSpan;
