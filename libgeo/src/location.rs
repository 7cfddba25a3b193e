//! Objects to manage the georeferenced locations in the database
use crate::{
    core::{
        database::Database,
        error::{Error, Result},
        loadable::Loadable,
        query::{
            DynFilterPart,
            filter::{Cmp, FilterPart},
        },
    },
    geometry::Point,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use sqlx::QueryBuilder;
use sqlx::Sqlite;
use sqlx::{prelude::*, sqlite::SqliteQueryResult};

/// A type for specifying fields that can be used for filtering a database
/// query for locations
#[derive(Clone)]
pub enum Filter {
    /// Match the ID of the location to the given value
    Id(i64),

    /// Compare the longitude of the location's point to the given value
    Longitude(Cmp, f64),

    /// Compare the latitude of the location's point to the given value
    Latitude(Cmp, f64),
}

impl FilterPart for Filter {
    fn add_to_query(&self, builder: &mut sqlx::QueryBuilder<sqlx::Sqlite>) {
        match self {
            Self::Id(id) => _ = builder.push(" L.locid = ").push_bind(*id),
            Self::Longitude(cmp, val) => {
                builder.push(" L.longitude ").push(cmp).push_bind(*val);
            }
            Self::Latitude(cmp, val) => {
                builder.push(" L.latitude ").push(cmp).push_bind(*val);
            }
        }
    }
}

/// A data type that represents a single georeferenced location. Its one
/// domain attribute is a [Point] under EPSG:4326; the identity is assigned by
/// the database when the location is inserted.
#[derive(Debug, sqlx::FromRow, Deserialize, Serialize, PartialEq, Clone)]
pub struct Location {
    /// A unique ID that identifies this location in the database
    #[sqlx(rename = "locid")]
    pub id: i64,

    /// Where this location is on the WGS 84 ellipsoid
    #[sqlx(flatten)]
    pub point: Point,
}

#[async_trait]
impl Loadable for Location {
    type Id = i64;

    fn invalid_id() -> Self::Id {
        -1
    }

    fn id(&self) -> Self::Id {
        self.id
    }

    fn set_id(&mut self, id: Self::Id) {
        self.id = id
    }

    async fn load(id: Self::Id, db: &Database) -> Result<Self> {
        Self::build_query(Some(Filter::Id(id).into()))
            .build_query_as()
            .fetch_one(db.pool())
            .await
            .map_err(|e| e.into())
    }

    async fn delete_id(id: &Self::Id, db: &Database) -> Result<SqliteQueryResult> {
        let res = sqlx::query(r#"DELETE FROM geo_locations WHERE locid=?1"#)
            .bind(id)
            .execute(db.pool())
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::DatabaseRowNotFound(sqlx::Error::RowNotFound));
        }
        Ok(res)
    }
}

impl Location {
    fn build_query(filter: Option<DynFilterPart>) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(
            r#"SELECT L.locid, L.longitude, L.latitude FROM geo_locations L"#,
        );
        if let Some(f) = filter {
            qb.push(" WHERE ");
            f.add_to_query(&mut qb);
        }
        qb.push(" ORDER BY locid ASC");
        qb
    }

    fn build_count(filter: Option<DynFilterPart>) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) as nlocations FROM geo_locations L");
        if let Some(f) = filter {
            qb.push(" WHERE ");
            f.add_to_query(&mut qb);
        }
        qb
    }

    /// Loads all matching locations from the database
    pub async fn load_all(filter: Option<DynFilterPart>, db: &Database) -> Result<Vec<Location>> {
        Self::build_query(filter)
            .build_query_as()
            .fetch_all(db.pool())
            .await
            .map_err(|e| e.into())
    }

    pub async fn count(filter: Option<DynFilterPart>, db: &Database) -> Result<i64> {
        Self::build_count(filter)
            .build()
            .fetch_one(db.pool())
            .await?
            .try_get("nlocations")
            .map_err(|e| e.into())
    }

    /// Add this location to the database. If this call completes
    /// successfully, the id of this object will be updated to the ID of the
    /// inserted row in the database, and that id is returned.
    pub async fn insert(&mut self, db: &Database) -> Result<i64> {
        if self.id != Self::invalid_id() {
            return Err(Error::InvalidInsertObjectAlreadyExists(self.id));
        }

        sqlx::query(
            r#"INSERT INTO geo_locations
          (longitude, latitude)
          VALUES (?, ?)"#,
        )
        .bind(self.point.longitude())
        .bind(self.point.latitude())
        .execute(db.pool())
        .await
        .map(|r| {
            self.id = r.last_insert_rowid();
            self.id
        })
        .map_err(|e| e.into())
    }

    /// Update the location in the database such that it matches this object
    pub async fn update(&self, db: &Database) -> Result<SqliteQueryResult> {
        if self.id < 0 {
            return Err(Error::InvalidUpdateObjectNotFound);
        }

        let res = sqlx::query("UPDATE geo_locations SET longitude=?, latitude=? WHERE locid=?")
            .bind(self.point.longitude())
            .bind(self.point.latitude())
            .bind(self.id)
            .execute(db.pool())
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::DatabaseRowNotFound(sqlx::Error::RowNotFound));
        }
        Ok(res)
    }

    /// Creates a new location object with the given point. It will initially
    /// have an invalid ID until it is inserted into the database
    pub fn new(point: Point) -> Self {
        Self {
            id: Self::invalid_id(),
            point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::filter::and;
    use sqlx::Pool;
    use test_log::test;

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn test_insert_locations(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        async fn check(db: &Database, longitude: f64, latitude: f64) {
            let mut loc = Location::new(Point::new(longitude, latitude).expect("invalid point"));
            let newid = loc.insert(db).await.expect("failed to insert");
            assert_eq!(newid, loc.id);
            let loaded = Location::load(newid, db)
                .await
                .expect("Failed to load inserted object");
            assert_eq!(loc, loaded);
            // exact round-trip of the coordinates
            assert_eq!(loaded.point.longitude(), longitude);
            assert_eq!(loaded.point.latitude(), latitude);
        }

        // San Francisco, longitude/latitude order
        check(&db, -122.4194, 37.7749).await;
        check(&db, 0.0, 0.0).await;
        check(&db, 180.0, -90.0).await;
    }

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn test_insert_existing(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        let mut loc = Location::new(Point::new(13.405, 52.52).unwrap());
        loc.insert(&db).await.expect("failed to insert");
        let res = loc.insert(&db).await;
        assert!(matches!(
            res,
            Err(Error::InvalidInsertObjectAlreadyExists(_))
        ));
    }

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn test_load_missing(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        let res = Location::load(12345, &db).await;
        assert!(matches!(res, Err(Error::DatabaseRowNotFound(_))));
    }

    #[test(sqlx::test(
        migrations = "../db/migrations/",
        fixtures(path = "../../db/fixtures", scripts("locations"))
    ))]
    async fn test_update_location(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        let mut loc = Location::load(1, &db).await.expect("failed to load");
        loc.point = Point::new(2.3522, 48.8566).unwrap();
        loc.update(&db).await.expect("failed to update");
        let reloaded = Location::load(1, &db).await.expect("failed to reload");
        assert_eq!(loc, reloaded);

        // updating an object that was never inserted is refused
        let fresh = Location::new(Point::new(0.0, 0.0).unwrap());
        assert!(matches!(
            fresh.update(&db).await,
            Err(Error::InvalidUpdateObjectNotFound)
        ));

        // updating a row that doesn't exist reports not-found
        let mut ghost = Location::new(Point::new(0.0, 0.0).unwrap());
        ghost.id = 12345;
        assert!(matches!(
            ghost.update(&db).await,
            Err(Error::DatabaseRowNotFound(_))
        ));
    }

    #[test(sqlx::test(
        migrations = "../db/migrations/",
        fixtures(path = "../../db/fixtures", scripts("locations"))
    ))]
    async fn test_delete_location(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        let mut loc = Location::load(2, &db).await.expect("failed to load");
        loc.delete(&db).await.expect("failed to delete");
        assert!(!loc.is_loaded());
        assert!(matches!(
            Location::load(2, &db).await,
            Err(Error::DatabaseRowNotFound(_))
        ));

        // deleting an id with no record reports not-found
        assert!(matches!(
            Location::delete_id(&12345, &db).await,
            Err(Error::DatabaseRowNotFound(_))
        ));
    }

    #[test(sqlx::test(
        migrations = "../db/migrations/",
        fixtures(path = "../../db/fixtures", scripts("locations"))
    ))]
    async fn test_load_all_filtered(pool: Pool<Sqlite>) {
        let db = Database::from(pool);
        let all = Location::load_all(None, &db).await.expect("failed to load");
        assert_eq!(all.len(), 3);
        // ordered by id
        assert_eq!(
            all.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        // bounding box around the northern hemisphere entries
        let filter = and()
            .push(Filter::Latitude(Cmp::NotLessThan, 0.0))
            .push(Filter::Longitude(Cmp::NotGreaterThan, 90.0))
            .build();
        let northern = Location::load_all(Some(filter.clone()), &db)
            .await
            .expect("failed to load");
        assert_eq!(northern.len(), 2);
        assert!(
            northern
                .iter()
                .all(|l| l.point.latitude() >= 0.0 && l.point.longitude() <= 90.0)
        );

        let n = Location::count(Some(filter), &db).await.expect("count");
        assert_eq!(n, 2);
        let total = Location::count(None, &db).await.expect("count");
        assert_eq!(total, 3);
    }
}
