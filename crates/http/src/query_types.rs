//! Request/query types (Deserialize)

use serde::Deserialize;

/// The cascading site → dataset selection carried by the record pages and
/// their JSON endpoints. Either part may be absent; handlers answer with an
/// empty list rather than an error so the pages can render the bare
/// selection controls.
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub site: Option<String>,
    pub dataset: Option<String>,
}

impl SelectionQuery {
    /// Both selections present — records can be looked up.
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match (self.site.as_deref(), self.dataset.as_deref()) {
            (Some(site), Some(dataset)) => Some((site, dataset)),
            _ => None,
        }
    }
}
