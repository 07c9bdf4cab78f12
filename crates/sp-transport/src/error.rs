use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid input: {what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },
}
