//! The contract-only source

use super::{DataSource, FetchOptions, SourceError, SourceResult};
use crate::detector::ChannelList;
use crate::timeseries::TimeSeriesDict;

/// Source with no data behind it; every fetch fails
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSource;

impl DataSource for NullSource {
    fn name(&self) -> &str {
        "none"
    }

    fn fetch(
        &mut self,
        _channels: &ChannelList,
        _start: f64,
        _end: f64,
        _options: &FetchOptions,
    ) -> SourceResult<TimeSeriesDict> {
        Err(SourceError::Unimplemented("fetch()".to_string()))
    }
}
