use std::path::PathBuf;

use anyhow::{Context, Result};

pub struct Config {
    pub mongodb_uri: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment. Only the store URI is
    /// mandatory; everything else has a sensible default.
    pub fn from_env() -> Result<Self> {
        let mongodb_uri =
            std::env::var("MONGODB_URI").context("MONGODB_URI must be set (see .env.example)")?;

        let host = std::env::var("ROTA_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("ROTA_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .context("ROTA_PORT must be a port number")?;
        let static_dir: PathBuf = std::env::var("ROTA_STATIC_DIR")
            .unwrap_or_else(|_| "public".into())
            .into();

        Ok(Self {
            mongodb_uri,
            host,
            port,
            static_dir,
        })
    }
}
