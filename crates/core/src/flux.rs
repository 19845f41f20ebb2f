use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single gas-flux measurement from a field plot.
///
/// Keyed by (site, dataset, sample_date, treatment_name, replicate_name,
/// crop); `crop` is nullable in the data and stays optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FluxSample {
    pub site: String,
    pub dataset: String,
    pub sample_date: NaiveDate,
    pub treatment_name: String,
    pub replicate_name: String,
    pub crop: Option<String>,
    /// Whether the plot had been fertilized at sampling time.
    pub fertilized: Option<bool>,
    pub tillage: Option<String>,
    pub n_inhibitor: Option<String>,
    pub irrigation: Option<String>,
    /// Gas species measured (e.g. N2O, CO2, CH4).
    pub gas: Option<String>,
    /// Measured emission rate.
    pub flux: Option<f64>,
}
