//! Per-channel collections of time-series chunks

use super::TimeSeries;
use crate::segments::{Segment, SegmentList};
use serde::{Deserialize, Serialize};

/// Ordered chunks of data for one channel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeriesList {
    series: Vec<TimeSeries>,
}

impl TimeSeriesList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, series: TimeSeries) {
        self.series.push(series);
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSeries> {
        self.series.iter()
    }

    pub fn as_slice(&self) -> &[TimeSeries] {
        &self.series
    }

    /// Total number of samples across all chunks
    pub fn sample_count(&self) -> usize {
        self.series.iter().map(TimeSeries::len).sum()
    }

    /// Exact coverage of the chunks
    pub fn segments(&self) -> SegmentList {
        self.series.iter().map(TimeSeries::span).collect()
    }

    /// First start to last end, ignoring gaps in between
    pub fn span(&self) -> Option<Segment> {
        self.series
            .iter()
            .filter(|ts| !ts.is_empty())
            .map(TimeSeries::span)
            .reduce(|a, b| a.hull(&b))
    }

    /// Merge overlapping and contiguous chunks
    ///
    /// Chunks are sorted by start time. A chunk is merged into the most
    /// recent earlier chunk that has the same sample spacing, touches it and
    /// shares its sample grid. Chunks with different spacing are never
    /// merged; if they overlap the data are inconsistent and both are kept.
    pub fn coalesce(self) -> Self {
        let mut chunks = self.series;
        chunks.retain(|ts| !ts.is_empty());
        chunks.sort_by(|a, b| a.t0.total_cmp(&b.t0));

        let mut out: Vec<TimeSeries> = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let target = out.iter().rposition(|prev| {
                prev.is_compatible(&chunk) && prev.touches(&chunk) && prev.is_aligned(&chunk)
            });

            if let Some(idx) = target {
                match out[idx].append(&chunk) {
                    Ok(()) => continue,
                    Err(e) => {
                        tracing::warn!("Keeping chunk at {} separate: {}", chunk.t0, e);
                    }
                }
            } else if out
                .iter()
                .any(|prev| prev.is_compatible(&chunk) && prev.touches(&chunk))
            {
                tracing::warn!("Keeping chunk at {} separate: not on a neighbouring sample grid", chunk.t0);
            }

            if let Some(clash) = out
                .iter()
                .find(|prev| !prev.is_compatible(&chunk) && prev.span().intersects(&chunk.span()))
            {
                tracing::warn!(
                    "Overlapping chunks with different sampling (dt {} vs {}) at {}",
                    clash.dt,
                    chunk.dt,
                    chunk.t0
                );
            }

            out.push(chunk);
        }

        Self { series: out }
    }
}

impl From<TimeSeries> for TimeSeriesList {
    fn from(series: TimeSeries) -> Self {
        Self {
            series: vec![series],
        }
    }
}

impl From<Vec<TimeSeries>> for TimeSeriesList {
    fn from(series: Vec<TimeSeries>) -> Self {
        Self { series }
    }
}

impl FromIterator<TimeSeries> for TimeSeriesList {
    fn from_iter<I: IntoIterator<Item = TimeSeries>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}

impl Extend<TimeSeries> for TimeSeriesList {
    fn extend<I: IntoIterator<Item = TimeSeries>>(&mut self, iter: I) {
        self.series.extend(iter);
    }
}

impl IntoIterator for TimeSeriesList {
    type Item = TimeSeries;
    type IntoIter = std::vec::IntoIter<TimeSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.into_iter()
    }
}

impl<'a> IntoIterator for &'a TimeSeriesList {
    type Item = &'a TimeSeries;
    type IntoIter = std::slice::Iter<'a, TimeSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
