//! A single half-open time interval on the GPS axis

use serde::{Deserialize, Serialize};

/// Half-open GPS time interval: `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time (inclusive), GPS seconds
    pub start: f64,
    /// End time (exclusive), GPS seconds
    pub end: f64,
}

impl Segment {
    /// Create a new segment
    ///
    /// # Panics
    /// Panics if start > end
    pub fn new(start: f64, end: f64) -> Self {
        assert!(start <= end, "Segment: start must not be after end");
        Self { start, end }
    }

    /// Create a segment, returning None if the bounds are reversed or NaN
    pub fn try_new(start: f64, end: f64) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Length of the segment in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// True if the segment covers no time at all
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if a GPS time falls within this segment
    pub fn contains_time(&self, t: f64) -> bool {
        t >= self.start && t < self.end
    }

    /// Check if `other` lies entirely within this segment
    pub fn contains(&self, other: &Segment) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Check if this segment shares a non-empty stretch of time with another
    pub fn intersects(&self, other: &Segment) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Intersection with another segment, if non-empty
    pub fn intersection(&self, other: &Segment) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Smallest segment covering both
    pub fn hull(&self, other: &Segment) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<(f64, f64)> for Segment {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} ... {})", self.start, self.end)
    }
}
