use async_trait::async_trait;
use fieldflux_core::Site;

use crate::error::StoreError;

/// Site lookups, including decoded point geometry.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// All sites in listed (primary-key) order, geometry decoded to
    /// coordinates where present.
    async fn list_sites(&self) -> Result<Vec<Site>, StoreError>;
}
