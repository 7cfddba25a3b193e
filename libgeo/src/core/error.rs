//! Objects related to reporting errors from this library

/// A list of error types that can occur within this library
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    // geometry validation errors
    #[error("invalid geometry: expected a POINT, found '{0}'")]
    InvalidGeometryType(String),

    #[error("invalid point: expected 2 coordinates, found {0}")]
    InvalidPointDimensions(usize),

    #[error("invalid point: coordinates must be finite numbers")]
    InvalidPointNotFinite,

    #[error("invalid point: longitude {0} is outside [-180, 180]")]
    InvalidPointLongitude(f64),

    #[error("invalid point: latitude {0} is outside [-90, 90]")]
    InvalidPointLatitude(f64),

    #[error("unable to parse '{0}' as a point")]
    InvalidPointSyntax(String),

    // object lifecycle errors
    #[error("can't update the object, no id was specified")]
    InvalidUpdateObjectNotFound,

    #[error("can't insert the object, it already exists in the database with id = {}", .0)]
    InvalidInsertObjectAlreadyExists(i64),

    #[error("invalid state: the object is not loaded")]
    InvalidStateNotLoaded,

    // database errors
    #[error("Database error: unspecified")]
    DatabaseUnspecified(#[source] sqlx::Error),

    #[error("Database error: row not found")]
    DatabaseRowNotFound(#[source] sqlx::Error),

    #[error(transparent)]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
}

impl std::convert::From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        match value {
            sqlx::Error::RowNotFound => Self::DatabaseRowNotFound(value),
            _ => Self::DatabaseUnspecified(value),
        }
    }
}

/// A convenience type alias for a [Result] with [Error] as its error type
pub type Result<T, E = Error> = std::result::Result<T, E>;
