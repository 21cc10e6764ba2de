//! Regularly-sampled time-series chunks

use crate::detector::Channel;
use crate::segments::Segment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two chunks are contiguous when one ends within this many seconds of
/// where the other starts (2^-18 s)
pub const CONTIGUITY_TOLERANCE: f64 = 1.0 / 262_144.0;

/// Fraction of a sample treated as rounding noise when mapping times to indices
const SAMPLE_EPSILON: f64 = 1e-6;

/// Errors from combining time-series chunks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Sample spacings differ
    #[error("Incompatible sampling: dt {expected} vs {found}")]
    IncompatibleSampling { expected: f64, found: f64 },

    /// Same spacing but the sample grids are offset from each other
    #[error("Sample grids are misaligned: t0 {found} is not on the grid starting at {expected}")]
    Misaligned { expected: f64, found: f64 },

    /// New data starts after the end of the existing data
    #[error("Cannot append with a gap: data ends at {end}, new data starts at {start}")]
    Gap { end: f64, start: f64 },

    /// New data starts before the existing data
    #[error("Cannot append data starting at {start} before existing start {t0}")]
    OutOfOrder { t0: f64, start: f64 },
}

/// One contiguous, regularly-sampled stretch of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    /// GPS time of the first sample
    pub t0: f64,
    /// Sample spacing in seconds
    pub dt: f64,
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Create a new chunk
    ///
    /// # Panics
    /// Panics if dt is not a positive finite number
    pub fn new(t0: f64, dt: f64, values: Vec<f64>) -> Self {
        assert!(dt.is_finite() && dt > 0.0, "TimeSeries: dt must be positive");
        Self {
            channel: None,
            t0,
            dt,
            values,
        }
    }

    /// Create a chunk from a sample rate in Hz
    pub fn from_sample_rate(t0: f64, sample_rate: f64, values: Vec<f64>) -> Self {
        Self::new(t0, 1.0 / sample_rate, values)
    }

    /// Builder: tag with a channel
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sample_rate(&self) -> f64 {
        1.0 / self.dt
    }

    /// GPS time just past the last sample
    pub fn end(&self) -> f64 {
        self.t0 + self.dt * self.values.len() as f64
    }

    pub fn duration(&self) -> f64 {
        self.dt * self.values.len() as f64
    }

    /// Time covered by this chunk: `[t0, t0 + dt * len)`
    pub fn span(&self) -> Segment {
        Segment::new(self.t0, self.end())
    }

    /// Timestamp of each sample
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.values.len()).map(move |i| self.t0 + self.dt * i as f64)
    }

    /// Index of the first sample at or after `t`, clamped to `[0, len]`
    fn index_at(&self, t: f64) -> usize {
        let raw = ((t - self.t0) / self.dt - SAMPLE_EPSILON).ceil();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(self.values.len())
        }
    }

    /// Samples whose timestamps fall in `[start, end)`
    pub fn crop(&self, start: f64, end: f64) -> TimeSeries {
        let i0 = self.index_at(start);
        let i1 = self.index_at(end).max(i0);

        TimeSeries {
            channel: self.channel.clone(),
            t0: self.t0 + self.dt * i0 as f64,
            dt: self.dt,
            values: self.values[i0..i1].to_vec(),
        }
    }

    /// Same sample spacing
    pub fn is_compatible(&self, other: &TimeSeries) -> bool {
        (self.dt - other.dt).abs() <= self.dt * 1e-9
    }

    /// Sample times of `other` fall on this chunk's grid
    pub fn is_aligned(&self, other: &TimeSeries) -> bool {
        let offset = (other.t0 - self.t0) / self.dt;
        (offset - offset.round()).abs() <= SAMPLE_EPSILON
    }

    /// `other` starts exactly where this chunk ends
    pub fn is_contiguous(&self, other: &TimeSeries) -> bool {
        (other.t0 - self.end()).abs() < CONTIGUITY_TOLERANCE
    }

    /// `other` starts no later than this chunk ends
    pub fn touches(&self, other: &TimeSeries) -> bool {
        other.t0 <= self.end() + CONTIGUITY_TOLERANCE && other.t0 + CONTIGUITY_TOLERANCE >= self.t0
    }

    /// Extend with a later chunk that overlaps or abuts this one
    ///
    /// Where the two overlap the existing samples win.
    pub fn append(&mut self, other: &TimeSeries) -> Result<(), SeriesError> {
        if !self.is_compatible(other) {
            return Err(SeriesError::IncompatibleSampling {
                expected: self.dt,
                found: other.dt,
            });
        }
        if other.t0 + CONTIGUITY_TOLERANCE < self.t0 {
            return Err(SeriesError::OutOfOrder {
                t0: self.t0,
                start: other.t0,
            });
        }
        if other.t0 > self.end() + CONTIGUITY_TOLERANCE {
            return Err(SeriesError::Gap {
                end: self.end(),
                start: other.t0,
            });
        }
        if !self.is_aligned(other) {
            return Err(SeriesError::Misaligned {
                expected: self.t0,
                found: other.t0,
            });
        }

        let skip = other.index_at(self.end());
        self.values.extend_from_slice(&other.values[skip..]);
        Ok(())
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}
