//! Interactive prompts for entering location data
use inquire::CustomType;
use libgeo::geometry::Point;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Prompt(#[from] inquire::InquireError),
    #[error(transparent)]
    Geometry(#[from] libgeo::Error),
}

/// Ask the user for a pair of coordinates, longitude first
pub fn prompt_point() -> Result<Point, Error> {
    let longitude = CustomType::<f64>::new("Longitude:")
        .with_help_message("decimal degrees, east positive")
        .prompt()?;
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_help_message("decimal degrees, north positive")
        .prompt()?;
    Point::new(longitude, latitude).map_err(Error::from)
}
