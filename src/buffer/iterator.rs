//! Sequential consumption of a buffer
//!
//! `DataIterator` walks a live position forward through GPS time, pulling
//! one stride of data through its buffer on every advance. It cannot be
//! rewound; build a new one to start over.

use super::cache::DataBuffer;
use super::request::BufferData;
use super::{BufferError, BufferResult};
use crate::segments::Segment;
use crate::source::FetchOptions;
use std::iter::FusedIterator;

/// Single-pass iterator over consecutive slices of buffered data
#[derive(Debug)]
pub struct DataIterator {
    buffer: DataBuffer,
    position: f64,
    stride: f64,
    stop: Option<f64>,
    options: FetchOptions,
    done: bool,
}

impl DataIterator {
    /// Iterate from `start` in steps of `stride` seconds
    pub fn new(buffer: DataBuffer, start: f64, stride: f64) -> BufferResult<Self> {
        if !(stride.is_finite() && stride > 0.0) {
            return Err(BufferError::InvalidTimeRange(format!(
                "stride must be positive, got {}",
                stride
            )));
        }

        Ok(Self {
            buffer,
            position: start,
            stride,
            stop: None,
            options: FetchOptions::new(),
            done: false,
        })
    }

    /// Builder: stop at `end` (the final slice is truncated to it)
    pub fn until(mut self, end: f64) -> Self {
        self.stop = Some(end);
        self
    }

    /// Builder: options passed to every fetch
    pub fn options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Start of the next slice
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn buffer(&self) -> &DataBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> DataBuffer {
        self.buffer
    }
}

impl Iterator for DataIterator {
    type Item = BufferResult<BufferData>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut end = self.position + self.stride;
        if let Some(stop) = self.stop {
            if self.position >= stop {
                self.done = true;
                return None;
            }
            end = end.min(stop);
        }

        let slice = Segment::new(self.position, end);
        match self.buffer.get(slice, true, &self.options) {
            Ok(data) => {
                tracing::trace!("[{}] advanced to {}", self.buffer.label(), end);
                self.position = end;
                Some(Ok(data))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for DataIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::cache::tests::Recorder;
    use crate::source::{NullSource, SourceError};

    #[test]
    fn test_yields_consecutive_slices() {
        let (source, log) = Recorder::new();
        let buffer = DataBuffer::new("X1:A-A", source).unwrap();
        let iter = DataIterator::new(buffer, 0.0, 4.0).unwrap().until(10.0);

        let slices: Vec<Segment> = iter
            .map(|r| r.unwrap().into_series().unwrap().span().unwrap())
            .collect();

        assert_eq!(
            slices,
            vec![
                Segment::new(0.0, 4.0),
                Segment::new(4.0, 8.0),
                Segment::new(8.0, 10.0)
            ]
        );
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_unbounded_keeps_advancing() {
        let (source, _log) = Recorder::new();
        let buffer = DataBuffer::new(vec!["X1:A-A", "X1:B-B"], source).unwrap();
        let mut iter = DataIterator::new(buffer, 100.0, 1.0).unwrap();

        for _ in 0..5 {
            assert!(iter.next().unwrap().is_ok());
        }
        assert_eq!(iter.position(), 105.0);
        assert_eq!(iter.buffer().extent(), Some(Segment::new(100.0, 105.0)));
    }

    #[test]
    fn test_stops_after_error() {
        let buffer = DataBuffer::new("X1:A-A", Box::new(NullSource)).unwrap();
        let mut iter = DataIterator::new(buffer, 0.0, 1.0).unwrap();

        assert!(matches!(
            iter.next(),
            Some(Err(BufferError::Source(SourceError::Unimplemented(_))))
        ));
        assert!(iter.next().is_none());
        assert_eq!(iter.position(), 0.0);
    }

    #[test]
    fn test_rejects_bad_stride() {
        let buffer = DataBuffer::new("X1:A-A", Box::new(NullSource)).unwrap();

        assert!(matches!(
            DataIterator::new(buffer, 0.0, 0.0),
            Err(BufferError::InvalidTimeRange(_))
        ));
    }
}
