use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
