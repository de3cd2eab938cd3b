use thiserror::Error;

use crate::strategic::sam_site::GridNo;

#[derive(Error, Debug)]
pub enum SamSiteError {
    #[error("SAM site gridNos must be an array of 2 integers (found {found})")]
    MalformedGridNos { found: String },

    #[error("SAM site gridNos must be 2 adjacent tiles (got {first} and {second})")]
    NonAdjacentTiles { first: GridNo, second: GridNo },

    #[error("Unexpected number of SAM sites: expected {expected}, found {found}")]
    UnexpectedSiteCount { expected: usize, found: usize },

    #[error("SAM site gridNos must be sorted descending (got {first} and {second})")]
    UnsortedGridNos { first: GridNo, second: GridNo },

    #[error("Invalid sector: {0:?}")]
    InvalidSector(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Grid number out of range: {0}")]
    GridNoOutOfRange(i64),

    #[error("Invalid map configuration: {0}")]
    InvalidConfig(String),

    #[error("SAM site #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<SamSiteError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SamSiteError {
    /// Wrap an error with the index of the record that produced it
    pub fn in_record(self, index: usize) -> Self {
        Self::Record {
            index,
            source: Box::new(self),
        }
    }

    /// The underlying error, looking through any record wrapper
    pub fn root(&self) -> &SamSiteError {
        match self {
            Self::Record { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SamSiteError>;
