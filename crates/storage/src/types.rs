use serde::{Deserialize, Serialize};

/// Row counts per record table, for the CLI `stats` command and `/api/stats`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoreStats {
    pub site_count: u64,
    pub fertilization_count: u64,
    pub treatment_count: u64,
    pub tillage_count: u64,
    pub flux_count: u64,
}
