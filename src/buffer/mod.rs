//! DataViewer Buffer
//!
//! This module provides the channel data cache:
//!
//! - **cache**: `DataBuffer`, the read-through segment cache
//! - **iterator**: `DataIterator`, single-pass streaming over a buffer
//! - **request**: query inputs (`ChannelSpec`, `Selection`) and `BufferData`
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! get(selection):
//!   Selection → SegmentList → missing = requested − available
//!     → DataSource::fetch (per missing segment) → append → coalesce
//!     → crop each channel to the selection → BufferData
//! ```
//!
//! # Example
//!
//! ```rust
//! use dataviewer::buffer::DataBuffer;
//! use dataviewer::source::{FetchOptions, SourceRegistry};
//!
//! let registry = SourceRegistry::default();
//! let mut buffer = DataBuffer::from_registry("L1:IMC-PWR_IN_OUT_DQ", &registry, "simulated")?;
//!
//! let data = buffer.get((1_000_000_000.0, 1_000_000_010.0), true, &FetchOptions::new())?;
//! let series = data.into_series().expect("single channel");
//! assert_eq!(series.len(), 1);
//! # Ok::<(), dataviewer::buffer::BufferError>(())
//! ```

pub mod cache;
pub mod error;
pub mod iterator;
pub mod request;

pub use cache::{DataBuffer, Extension};
pub use error::{BufferError, BufferResult};
pub use iterator::DataIterator;
pub use request::{BufferData, ChannelInput, ChannelSpec, Selection};
