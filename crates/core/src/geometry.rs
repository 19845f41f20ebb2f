//! EWKB point decoding for site geometries.
//!
//! The store keeps site locations in a PostGIS `geometry(Point, 4326)` column
//! and hands them to us as EWKB bytes (`ST_AsEWKB`). This module extracts the
//! (longitude, latitude) pair as a pure function of those bytes — no hidden
//! state, absence of geometry is the caller's `Option`, not an error here.

use serde::Serialize;
use thiserror::Error;

/// EWKB flag bit: geometry carries a Z coordinate.
const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// EWKB flag bit: geometry carries an M coordinate.
const EWKB_M_FLAG: u32 = 0x4000_0000;
/// EWKB flag bit: an SRID word follows the type word.
const EWKB_SRID_FLAG: u32 = 0x2000_0000;
/// WKB geometry type code for POINT.
const WKB_POINT: u32 = 1;

/// A decoded geographic point in degrees (x = longitude, y = latitude).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointCoords {
    pub longitude: f64,
    pub latitude: f64,
}

/// Errors from decoding an EWKB value that should have been a point.
///
/// Well-formed geometries are guaranteed by the store, so any of these
/// indicates corrupt column data rather than a user-facing condition.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Fewer bytes than the declared layout requires.
    #[error("truncated EWKB value: {0} bytes")]
    Truncated(usize),

    /// First byte was neither 0 (big endian) nor 1 (little endian).
    #[error("invalid EWKB byte-order marker: {0:#04x}")]
    InvalidByteOrder(u8),

    /// Base geometry type was not POINT.
    #[error("expected POINT geometry, got WKB type {0}")]
    UnexpectedGeometryType(u32),
}

/// Decode an EWKB (or plain WKB) POINT into a coordinate pair.
///
/// Handles both byte orders, the optional SRID word, and ignores trailing
/// Z/M ordinates when their flag bits are set — x and y always come first.
pub fn decode_ewkb_point(bytes: &[u8]) -> Result<PointCoords, GeometryError> {
    let mut cursor = Cursor { bytes, pos: 0, little_endian: true };

    let order = cursor.take_u8()?;
    cursor.little_endian = match order {
        0 => false,
        1 => true,
        other => return Err(GeometryError::InvalidByteOrder(other)),
    };

    let type_word = cursor.take_u32()?;
    let base_type = type_word & !(EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG);
    if base_type != WKB_POINT {
        return Err(GeometryError::UnexpectedGeometryType(base_type));
    }

    if type_word & EWKB_SRID_FLAG != 0 {
        // SRID is carried but not validated: the store pins it to 4326.
        let _srid = cursor.take_u32()?;
    }

    let longitude = cursor.take_f64()?;
    let latitude = cursor.take_f64()?;
    Ok(PointCoords { longitude, latitude })
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    little_endian: bool,
}

impl Cursor<'_> {
    fn take_u8(&mut self) -> Result<u8, GeometryError> {
        let b = *self
            .bytes
            .get(self.pos)
            .ok_or(GeometryError::Truncated(self.bytes.len()))?;
        self.pos += 1;
        Ok(b)
    }

    fn take_u32(&mut self) -> Result<u32, GeometryError> {
        let raw: [u8; 4] = self.take_array()?;
        Ok(if self.little_endian { u32::from_le_bytes(raw) } else { u32::from_be_bytes(raw) })
    }

    fn take_f64(&mut self) -> Result<f64, GeometryError> {
        let raw: [u8; 8] = self.take_array()?;
        Ok(if self.little_endian { f64::from_le_bytes(raw) } else { f64::from_be_bytes(raw) })
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], GeometryError> {
        let end = self.pos.checked_add(N).ok_or(GeometryError::Truncated(self.bytes.len()))?;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or(GeometryError::Truncated(self.bytes.len()))?;
        self.pos = end;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WGS84_SRID;

    /// Build an EWKB point the way PostGIS emits it.
    fn encode_point(
        longitude: f64,
        latitude: f64,
        little_endian: bool,
        srid: Option<i32>,
    ) -> Vec<u8> {
        let mut out = Vec::with_capacity(25);
        out.push(u8::from(little_endian));
        let mut type_word = WKB_POINT;
        if srid.is_some() {
            type_word |= EWKB_SRID_FLAG;
        }
        let push_u32 = |out: &mut Vec<u8>, v: u32| {
            if little_endian {
                out.extend_from_slice(&v.to_le_bytes());
            } else {
                out.extend_from_slice(&v.to_be_bytes());
            }
        };
        let push_f64 = |out: &mut Vec<u8>, v: f64| {
            if little_endian {
                out.extend_from_slice(&v.to_le_bytes());
            } else {
                out.extend_from_slice(&v.to_be_bytes());
            }
        };
        push_u32(&mut out, type_word);
        if let Some(srid) = srid {
            push_u32(&mut out, srid as u32);
        }
        push_f64(&mut out, longitude);
        push_f64(&mut out, latitude);
        out
    }

    #[test]
    fn test_decode_little_endian_with_srid() {
        let bytes = encode_point(-85.371, 42.411, true, Some(WGS84_SRID));
        let point = decode_ewkb_point(&bytes).expect("valid EWKB point");
        assert_eq!(point.longitude, -85.371);
        assert_eq!(point.latitude, 42.411);
    }

    #[test]
    fn test_decode_big_endian_with_srid() {
        let bytes = encode_point(10.0, 20.0, false, Some(WGS84_SRID));
        let point = decode_ewkb_point(&bytes).expect("valid EWKB point");
        assert_eq!(point.longitude, 10.0);
        assert_eq!(point.latitude, 20.0);
    }

    #[test]
    fn test_decode_plain_wkb_without_srid() {
        let bytes = encode_point(0.5, -0.25, true, None);
        let point = decode_ewkb_point(&bytes).expect("valid WKB point");
        assert_eq!(point.longitude, 0.5);
        assert_eq!(point.latitude, -0.25);
    }

    #[test]
    fn test_roundtrip_precision() {
        let lon = -85.400_724_686;
        let lat = 42.476_933_501;
        let bytes = encode_point(lon, lat, true, Some(WGS84_SRID));
        let point = decode_ewkb_point(&bytes).expect("valid EWKB point");
        assert_eq!(point.longitude, lon);
        assert_eq!(point.latitude, lat);
    }

    #[test]
    fn test_z_ordinate_is_ignored() {
        // POINT Z: x/y decode fine, trailing z is simply not read.
        let mut bytes = Vec::new();
        bytes.push(1u8);
        bytes.extend_from_slice(&(WKB_POINT | EWKB_Z_FLAG | EWKB_SRID_FLAG).to_le_bytes());
        bytes.extend_from_slice(&(WGS84_SRID as u32).to_le_bytes());
        bytes.extend_from_slice(&1.0f64.to_le_bytes());
        bytes.extend_from_slice(&2.0f64.to_le_bytes());
        bytes.extend_from_slice(&99.0f64.to_le_bytes());
        let point = decode_ewkb_point(&bytes).expect("valid EWKB point z");
        assert_eq!(point.longitude, 1.0);
        assert_eq!(point.latitude, 2.0);
    }

    #[test]
    fn test_truncated_input() {
        let bytes = encode_point(1.0, 2.0, true, Some(WGS84_SRID));
        let err = decode_ewkb_point(&bytes[..bytes.len() - 4]).unwrap_err();
        assert!(matches!(err, GeometryError::Truncated(_)));
    }

    #[test]
    fn test_empty_input() {
        let err = decode_ewkb_point(&[]).unwrap_err();
        assert!(matches!(err, GeometryError::Truncated(0)));
    }

    #[test]
    fn test_invalid_byte_order() {
        let err = decode_ewkb_point(&[7, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidByteOrder(7)));
    }

    #[test]
    fn test_non_point_geometry_rejected() {
        // LINESTRING (type 2) must not decode as a point.
        let mut bytes = vec![1u8];
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 16]);
        let err = decode_ewkb_point(&bytes).unwrap_err();
        assert!(matches!(err, GeometryError::UnexpectedGeometryType(2)));
    }
}
