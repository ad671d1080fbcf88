use thiserror::Error;

#[derive(Error, Debug)]
pub enum OncoError {
    #[error("Neighbor view needs exactly 8 slots, got {0}")]
    NeighborCount(usize),

    #[error("Offset ({0}, {1}) is not a Moore neighbor offset")]
    InvalidOffset(i32, i32),

    #[error("Unknown phenotype: {0:?}")]
    UnknownPhenotype(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OncoError>;
