//! Buffer error types

use crate::detector::ChannelError;
use crate::source::SourceError;
use crate::time::TimeError;
use thiserror::Error;

/// Errors that can occur in buffer operations
#[derive(Error, Debug)]
pub enum BufferError {
    /// Failure reported by the data source, passed through untouched
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Channel name could not be resolved
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// Time string could not be converted to GPS
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Requested bound is on the wrong side of the buffered range
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    /// Operation needs buffered data but there is none
    #[error("Buffer holds no data yet")]
    EmptyBuffer,

    /// Construction without any channel
    #[error("A buffer needs at least one channel")]
    NoChannels,
}

/// Result type alias for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;
