use thiserror::Error;

/// Failures surfaced by the planet store and query engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanetError {
    #[error("planet {0} not found")]
    NotFound(i64),

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl PlanetError {
    /// Short machine-readable kind, used in HTTP error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            PlanetError::NotFound(_) => "not_found",
            PlanetError::InvalidQuery(_) => "invalid_query",
        }
    }
}

pub type PlanetResult<T> = Result<T, PlanetError>;
