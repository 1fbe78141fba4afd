use thiserror::Error;

pub type DocResult<T> = Result<T, DocError>;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("invalid json payload: {0}")]
    InvalidPayload(String),

    #[error("unsupported document schema version: {0}")]
    UnsupportedSchemaVersion(u32),
}
