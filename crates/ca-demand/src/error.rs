use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("demand data parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DemandResult<T> = Result<T, DemandError>;
