use libgeo::{geometry::Point, location::Location};
use serde::Serialize;
use tabled::Tabled;

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "PascalCase")]
pub(crate) struct LocationRow {
    id: i64,
    longitude: f64,
    latitude: f64,
}

impl LocationRow {
    pub(crate) fn new(location: &Location) -> Self {
        Self {
            id: location.id,
            longitude: location.point.longitude(),
            latitude: location.point.latitude(),
        }
    }
}

#[derive(Tabled, Serialize)]
#[tabled(rename_all = "PascalCase")]
pub(crate) struct LocationRowFull {
    id: i64,
    longitude: f64,
    latitude: f64,
    srid: String,
    wkt: String,
}

impl LocationRowFull {
    pub(crate) fn new(location: &Location) -> Self {
        Self {
            id: location.id,
            longitude: location.point.longitude(),
            latitude: location.point.latitude(),
            srid: Point::SRID.to_string(),
            wkt: location.point.to_wkt(),
        }
    }
}
