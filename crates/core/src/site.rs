use serde::Serialize;

use crate::geometry::PointCoords;

/// A field-trial site with an optional geographic location.
///
/// At most one point per site; sites without a surveyed location carry `None`.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    /// Primary key in the site table.
    pub id: i32,
    /// Display name, nullable in the backing store.
    pub name: Option<String>,
    /// Decoded (longitude, latitude) pair, absent when the row has no geometry.
    pub coords: Option<PointCoords>,
}

/// Map center for the site overview: the first listed site that has
/// coordinates, falling back to (0, 0) when none do.
///
/// Returned as (latitude, longitude) — the order mapping libraries expect.
pub fn map_center(sites: &[Site]) -> (f64, f64) {
    sites
        .iter()
        .find_map(|s| s.coords)
        .map_or((0.0, 0.0), |c| (c.latitude, c.longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: i32, coords: Option<(f64, f64)>) -> Site {
        Site {
            id,
            name: Some(format!("site-{id}")),
            coords: coords.map(|(longitude, latitude)| PointCoords { longitude, latitude }),
        }
    }

    #[test]
    fn test_map_center_uses_first_listed_site() {
        let sites = vec![site(1, Some((10.0, 20.0))), site(2, Some((30.0, 40.0)))];
        assert_eq!(map_center(&sites), (20.0, 10.0));
    }

    #[test]
    fn test_map_center_skips_sites_without_coords() {
        let sites = vec![site(1, None), site(2, Some((30.0, 40.0)))];
        assert_eq!(map_center(&sites), (40.0, 30.0));
    }

    #[test]
    fn test_map_center_fallback_when_empty() {
        assert_eq!(map_center(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_map_center_fallback_when_no_coords_at_all() {
        let sites = vec![site(1, None), site(2, None)];
        assert_eq!(map_center(&sites), (0.0, 0.0));
    }
}
