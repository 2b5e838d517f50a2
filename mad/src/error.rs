//! Trace error types

use thiserror::Error;

/// Errors that can occur while writing a trace
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Failed to write trace output: {0}")]
    Write(#[from] std::io::Error),
}
