//! Time-series containers
//!
//! - **series**: `TimeSeries`, one contiguous regularly-sampled chunk
//! - **list**: `TimeSeriesList`, the chunks held for one channel
//! - **dict**: `TimeSeriesDict`, channel to list mapping
//!
//! # Coalescing
//!
//! ```text
//!   [0----5)  [5----10)      [20--25)        before
//!   [0-------------10)       [20--25)        after coalesce()
//! ```

pub mod dict;
pub mod list;
pub mod series;

pub use dict::TimeSeriesDict;
pub use list::TimeSeriesList;
pub use series::{SeriesError, TimeSeries, CONTIGUITY_TOLERANCE};
