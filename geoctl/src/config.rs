use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::{
    fs::{File, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};
use tracing::debug;

#[derive(Deserialize, Serialize)]
pub struct Config {
    pub database: PathBuf,
}

impl Config {
    fn parse(contents: String) -> Result<Self> {
        serde_json::from_str(&contents).with_context(|| "Couldn't parse json string")
    }

    fn format(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Couldn't convert config to json")
    }

    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        debug!(?p, "Trying to load config");
        let contents = read_to_string(path).await?;
        Self::parse(contents)
    }

    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(?path, "Saving config");
        let mut file = File::create(path).await?;
        let serialized = self.format()?;
        file.write_all(serialized.as_bytes())
            .await
            .with_context(|| "Failed to write config file")?;
        Ok(())
    }

    pub fn new(database: PathBuf) -> Self {
        Config { database }
    }
}

/// The path of the config file in the platform config directory, creating
/// the directory if needed
pub async fn config_file() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("org", "geocollection", "geoctl")
        .ok_or_else(|| anyhow!("Couldn't determine config directory"))?;
    create_dir_all(dirs.config_dir()).await?;
    Ok(dirs.config_dir().join("config.json"))
}
