//! Response types (Serialize)

use serde::Serialize;

use fieldflux_core::Site;
use fieldflux_core::timeline::TimelineSpan;

/// One site row for `/data`: coordinates flattened out of the geometry,
/// `null` when the site has none.
#[derive(Debug, Serialize)]
pub struct SiteResponse {
    pub id: i32,
    pub name: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

impl From<Site> for SiteResponse {
    fn from(site: Site) -> Self {
        Self {
            id: site.id,
            name: site.name,
            longitude: site.coords.map(|c| c.longitude),
            latitude: site.coords.map(|c| c.latitude),
        }
    }
}

/// Marker map configuration: center is server-computed from the first
/// listed site with coordinates, (0, 0) when there is none.
#[derive(Debug, Serialize)]
pub struct MapConfigResponse {
    /// [latitude, longitude], the order mapping libraries expect.
    pub center: [f64; 2],
    pub sites: Vec<SiteResponse>,
}

/// The three timeline tables behind `/fluxes`.
#[derive(Debug, Serialize)]
pub struct FluxTimelineResponse {
    pub by_gas: Vec<TimelineSpan>,
    pub by_crop: Vec<TimelineSpan>,
    pub by_tillage: Vec<TimelineSpan>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fieldflux_core::PointCoords;

    #[test]
    fn test_site_with_coords_flattens() {
        let site = Site {
            id: 1,
            name: Some("KBS".to_owned()),
            coords: Some(PointCoords { longitude: -85.4, latitude: 42.4 }),
        };
        let resp = SiteResponse::from(site);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["longitude"], -85.4);
        assert_eq!(json["latitude"], 42.4);
    }

    #[test]
    fn test_site_without_coords_serializes_null() {
        let site = Site { id: 2, name: None, coords: None };
        let resp = SiteResponse::from(site);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["longitude"].is_null());
        assert!(json["latitude"].is_null());
        assert!(json["name"].is_null());
    }
}
