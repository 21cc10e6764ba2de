//! Data sources
//!
//! A buffer never talks to a data archive itself. It delegates every
//! retrieval to a [`DataSource`], chosen by name from a [`SourceRegistry`]:
//!
//! - **none**: [`NullSource`], the bare contract; every fetch is unimplemented
//! - **simulated**: [`SimulatedSource`], deterministic synthetic sinusoids
//!
//! Network-backed sources (NDS2, frame files) implement the same trait in
//! the embedding application and register themselves under their own name.

pub mod null;
pub mod registry;
pub mod simulated;

pub use null::NullSource;
pub use registry::{SourceFactory, SourceRegistry};
pub use simulated::{SimulatedConfig, SimulatedSource};

use crate::detector::ChannelList;
use crate::timeseries::TimeSeriesDict;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by data sources and the source registry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The source does not provide this operation
    #[error("{0} must be provided by a concrete data source")]
    Unimplemented(String),

    /// Registry lookup failed
    #[error("No data source registered as {0:?}")]
    NotRegistered(String),

    /// Registry already holds a source under this name
    #[error("Data source already registered with name {0:?}")]
    AlreadyRegistered(String),

    /// A fetch option had the wrong type or value
    #[error("Invalid fetch option {key:?}: {reason}")]
    InvalidOption { key: String, reason: String },

    /// Retrieval itself failed
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

/// Result type alias for data source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Retrieves time series for a set of channels over a GPS interval
pub trait DataSource {
    /// Name the source is registered under
    fn name(&self) -> &str;

    /// Fetch data for every channel covering at least `[start, end)`
    fn fetch(
        &mut self,
        channels: &ChannelList,
        start: f64,
        end: f64,
        options: &FetchOptions,
    ) -> SourceResult<TimeSeriesDict>;
}

/// Open-ended options passed through to [`DataSource::fetch`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FetchOptions {
    values: BTreeMap<String, Value>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set an option
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Numeric option; absent is Ok(None), non-numeric is an error
    pub fn get_f64(&self, key: &str) -> SourceResult<Option<f64>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or_else(|| SourceError::InvalidOption {
                key: key.to_string(),
                reason: format!("expected a number, got {}", value),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}
