//! Geometric values stored by this library. The only geometry supported here
//! is a two-dimensional point referenced to WGS 84; anything else is rejected
//! at construction time so that a [Point] that exists is always well-formed.
use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A spatial reference identifier naming the coordinate reference system that
/// a geometric value is interpreted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Srid(u32);

impl Srid {
    /// EPSG:4326, geographic coordinates (degrees of longitude and latitude)
    /// on the WGS 84 ellipsoid
    pub const WGS84: Srid = Srid(4326);

    pub fn code(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Srid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// A 2D point in longitude/latitude order. All points carry the same
/// reference system ([Point::SRID]); it is a property of the type, not of
/// individual values, so it is never persisted per record.
///
/// Points can only be created through validating paths ([Point::new],
/// [FromStr], serde deserialization), which guarantees that the coordinates
/// are finite and within the valid EPSG:4326 domain.
#[derive(Debug, Clone, Copy, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    longitude: f64,
    latitude: f64,
}

impl Point {
    /// The reference system for all [Point] values
    pub const SRID: Srid = Srid::WGS84;

    /// Create a new point from coordinates given in degrees, longitude first
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(Error::InvalidPointNotFinite);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidPointLongitude(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidPointLatitude(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Render this point in Well-Known Text notation
    pub fn to_wkt(&self) -> String {
        format!("POINT({} {})", self.longitude, self.latitude)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_wkt())
    }
}

/// Unvalidated deserialization target for [Point]
#[derive(Deserialize)]
struct RawPoint {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = Error;

    fn try_from(value: RawPoint) -> Result<Self> {
        Point::new(value.longitude, value.latitude)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse a point from Well-Known Text (`POINT(lon lat)`, tag matched
    /// case-insensitively) or from the shorthand `lon,lat`. WKT input naming
    /// any other geometry type is rejected with
    /// [Error::InvalidGeometryType].
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(open) = s.find('(') {
            let close = s
                .rfind(')')
                .ok_or_else(|| Error::InvalidPointSyntax(s.to_string()))?;
            if close < open {
                return Err(Error::InvalidPointSyntax(s.to_string()));
            }
            let tag = s[..open].trim().to_ascii_uppercase();
            if tag != "POINT" {
                return Err(Error::InvalidGeometryType(tag));
            }
            let coords = s[open + 1..close]
                .split_whitespace()
                .map(|c| {
                    c.parse::<f64>()
                        .map_err(|_| Error::InvalidPointSyntax(s.to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
            if coords.len() != 2 {
                return Err(Error::InvalidPointDimensions(coords.len()));
            }
            Self::new(coords[0], coords[1])
        } else {
            let coords = s
                .split(',')
                .map(|c| {
                    c.trim()
                        .parse::<f64>()
                        .map_err(|_| Error::InvalidPointSyntax(s.to_string()))
                })
                .collect::<Result<Vec<_>>>()?;
            if coords.len() != 2 {
                return Err(Error::InvalidPointDimensions(coords.len()));
            }
            Self::new(coords[0], coords[1])
        }
    }
}
