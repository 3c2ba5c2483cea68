use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("invalid list configuration: {0}")]
    InvalidListConfig(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("no config path available")]
    NoConfigPath,

    #[error("game source failed: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, FrontendError>;
