use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;
const DATABASE_FILE: &str = "app.db";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from a variable lookup, falling back to defaults for unset
    /// variables.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Resolved configuration
    /// - `Err(AppError::ConfigErr)` - A variable is set to an unusable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = match lookup("DB_URI").or_else(|| lookup("DATABASE_URL")) {
            Some(url) => url,
            None => default_database_url()?,
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite file next to the server executable, created on first connect.
fn default_database_url() -> Result<String, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::ExecutablePath)?;
    let dir = exe.parent().map(PathBuf::from).unwrap_or_default();

    Ok(format!(
        "sqlite://{}?mode=rwc",
        dir.join(DATABASE_FILE).display()
    ))
}
