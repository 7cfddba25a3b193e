//! Commands operating on [Location] records
use crate::{
    cli::Commands,
    output::{
        self,
        rows::{LocationRow, LocationRowFull},
    },
    prompt::prompt_point,
};
use anyhow::{Result, anyhow};
use libgeo::{
    Error::DatabaseRowNotFound,
    core::{
        database::Database,
        loadable::Loadable,
        query::filter::{Cmp, and},
    },
    geometry::Point,
    location::{Filter, Location},
};

/// Handle all the `geoctl` subcommands that touch the database
pub(crate) async fn handle_command(command: Commands, db: &Database) -> Result<()> {
    match command {
        // handled in main before the database is opened
        Commands::Use { .. } | Commands::Status => Ok(()),
        Commands::Add {
            longitude,
            latitude,
            point,
        } => {
            let point = match (point, longitude, latitude) {
                (Some(point), _, _) => point,
                (None, Some(longitude), Some(latitude)) => Point::new(longitude, latitude)?,
                (None, None, None) => prompt_point()?,
                // clap enforces that the coordinates come in pairs
                _ => return Err(anyhow!("Both --longitude and --latitude are required")),
            };
            let mut location = Location::new(point);
            let newid = location.insert(db).await?;
            println!("Added location {newid} to database");
            Ok(())
        }
        Commands::List {
            output,
            min_longitude,
            max_longitude,
            min_latitude,
            max_latitude,
        } => {
            let filter = {
                let mut fbuilder = and();
                let mut any = false;
                if let Some(val) = min_longitude {
                    fbuilder = fbuilder.push(Filter::Longitude(Cmp::NotLessThan, val));
                    any = true;
                }
                if let Some(val) = max_longitude {
                    fbuilder = fbuilder.push(Filter::Longitude(Cmp::NotGreaterThan, val));
                    any = true;
                }
                if let Some(val) = min_latitude {
                    fbuilder = fbuilder.push(Filter::Latitude(Cmp::NotLessThan, val));
                    any = true;
                }
                if let Some(val) = max_latitude {
                    fbuilder = fbuilder.push(Filter::Latitude(Cmp::NotGreaterThan, val));
                    any = true;
                }
                any.then(|| fbuilder.build())
            };
            let locations = Location::load_all(filter, db).await?;
            let str = match output.full {
                true => {
                    let rows = locations.iter().map(LocationRowFull::new);
                    output::format_seq(rows, output.format)?
                }
                false => {
                    let rows = locations.iter().map(LocationRow::new);
                    output::format_seq(rows, output.format)?
                }
            };
            println!("{str}");
            Ok(())
        }
        Commands::Show { id, output } => match Location::load(id, db).await {
            Ok(location) => {
                let str = output::format_one(LocationRowFull::new(&location), output.format)?;
                println!("{str}");
                Ok(())
            }
            Err(DatabaseRowNotFound(_)) => {
                println!("Location {id} not found");
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        Commands::Modify {
            id,
            longitude,
            latitude,
            point,
        } => {
            let mut location = match Location::load(id, db).await {
                Ok(location) => location,
                Err(DatabaseRowNotFound(_)) => {
                    println!("Location {id} not found");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            location.point = match point {
                Some(point) => point,
                None => Point::new(
                    longitude.unwrap_or_else(|| location.point.longitude()),
                    latitude.unwrap_or_else(|| location.point.latitude()),
                )?,
            };
            location.update(db).await?;
            println!("Modified location {id}");
            Ok(())
        }
        Commands::Remove { id } => match Location::delete_id(&id, db).await {
            Ok(_) => {
                println!("Removed location {id} from database");
                Ok(())
            }
            Err(DatabaseRowNotFound(_)) => {
                println!("Location {id} not found");
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
    }
}
