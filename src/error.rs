use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't read config file {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("couldn't write config file {}: {source}", path.display())]
    ConfigWrite { path: PathBuf, source: io::Error },

    #[error("couldn't parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("couldn't serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("no config directory available on this platform")]
    NoConfigDir,

    /// The alarm store was accessed but the store module was never installed.
    #[error("alarm store accessed before the store module was installed")]
    StoreNotInstalled,

    #[error("app is already mounted at `{0}`")]
    AlreadyMounted(String),

    #[error("no route for path `{0}`")]
    UnknownRoute(String),
}
