//! Event and definition records keyed by site/dataset composites.
//!
//! Immutable reference data loaded by an external bulk import; the
//! application only reads them back out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fertilizer application, keyed by (site, dataset, date, treatment, replicate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizationEvent {
    pub site: String,
    pub dataset: String,
    pub date: NaiveDate,
    pub treatment: String,
    pub replicate: String,
    /// Applied nitrogen rate, typically kg N / ha.
    pub n_rate: Option<f64>,
    pub formulation: Option<String>,
    pub unit: Option<String>,
    pub placement: Option<String>,
}

/// The experimental condition applied to a plot for one year,
/// keyed by (site, dataset, year).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentDefinition {
    pub site: String,
    pub dataset: String,
    pub year: i32,
    pub crop: Option<String>,
    pub tillage: Option<String>,
    pub irrigation: Option<String>,
    pub cover_crop: Option<String>,
    pub comments: Option<String>,
}

/// A tillage operation, keyed by (site, dataset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TillageEvent {
    pub site: String,
    pub dataset: String,
    pub date: Option<NaiveDate>,
    pub tillage_type: Option<String>,
    pub depth: Option<String>,
    pub time: Option<String>,
    pub comments: Option<String>,
}
