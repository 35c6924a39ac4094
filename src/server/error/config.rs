use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    ///
    /// Unset variables fall back to their defaults; this error is only raised for
    /// values that fail to parse.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    /// The directory of the running executable could not be resolved.
    ///
    /// Needed to place the default database file next to the server binary.
    #[error("Failed to locate server executable: {0}")]
    ExecutablePath(#[source] std::io::Error),
}
