//! # DataViewer
//!
//! Visualization support for gravitational-wave detector time-series data.
//! The core is a read-through buffer that caches channel data per segment of
//! GPS time and fetches whatever a query needs but the buffer lacks.
//!
//! ## Modules
//!
//! - [`buffer`]: `DataBuffer` and `DataIterator`
//! - [`source`]: the `DataSource` trait, built-in sources and their registry
//! - [`segments`]: segment algebra and data-quality flags
//! - [`timeseries`]: time-series chunks, per-channel lists and dicts
//! - [`detector`]: channel names and resolution
//! - [`time`]: GPS time conversion
//! - [`config`]: TOML/environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use dataviewer::{DataBuffer, FetchOptions, Segment, SourceRegistry};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = SourceRegistry::default();
//!     let mut buffer = DataBuffer::from_registry(
//!         vec!["H1:GDS-CALIB_STRAIN", "L1:GDS-CALIB_STRAIN"],
//!         &registry,
//!         "simulated",
//!     )?;
//!
//!     // First query fetches, second is served from the buffer
//!     let options = FetchOptions::new();
//!     buffer.get(Segment::new(1126259446.0, 1126259478.0), true, &options)?;
//!     let data = buffer.get(Segment::new(1126259460.0, 1126259464.0), true, &options)?;
//!
//!     for (channel, series) in data.into_dict().iter() {
//!         println!("{}: {} samples", channel, series.sample_count());
//!     }
//!     Ok(())
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod detector;
pub mod segments;
pub mod source;
pub mod time;
pub mod timeseries;

// Re-export top-level types for convenience
pub use buffer::{
    BufferData, BufferError, BufferResult, ChannelSpec, DataBuffer, DataIterator, Extension,
    Selection,
};

pub use detector::{Channel, ChannelError, ChannelList, ChannelResolver, NameResolver};

pub use segments::{DataQualityFlag, Segment, SegmentList};

pub use source::{
    DataSource, FetchOptions, NullSource, SimulatedConfig, SimulatedSource, SourceError,
    SourceRegistry, SourceResult,
};

pub use timeseries::{SeriesError, TimeSeries, TimeSeriesDict, TimeSeriesList};

pub use time::{to_gps, TimeError};

pub use config::{BufferSettings, Config, ConfigError, LoggingConfig};
