use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Directory whose files are served for every non-API path.
    pub site_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = var("CLINIC_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = var("CLINIC_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("CLINIC_PORT must be a port number")?;
        let db_path = var("CLINIC_DB_PATH").unwrap_or_else(|| "medical.db".into()).into();
        let site_dir = var("CLINIC_SITE_DIR").unwrap_or_else(|| ".".into()).into();

        Ok(Self { host, port, db_path, site_dir })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
