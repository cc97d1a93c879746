use std::path::PathBuf;

use estate_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid carousel configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid catalogue: {0}")]
    Catalogue(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
