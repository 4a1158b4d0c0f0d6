use std::io;
use thiserror::Error;
use wave_transform_api::WaveError;

/// Malformed user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token of the sequence is not an integer.
    #[error("Invalid integer: {0}")]
    InvalidInteger(String),
    /// The half width is not an integer, or is less than 1.
    #[error("Invalid value for x. Must be an integer >= 1.")]
    InvalidHalfWidth(String),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Wave(#[from] WaveError),
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
