use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SpongeError {
    #[error("The path {0} not exist")]
    PathNotExist(String),

    #[error("The path {0} is not a file")]
    NotFile(String),

    #[error("Invalid hex string `{0}`")]
    InvalidHex(String),

    #[error("{0}")]
    InvalidArg(String),

    #[error("{0}")]
    ConfigFailed(String),
}
