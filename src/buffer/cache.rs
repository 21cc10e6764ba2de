//! The read-through segment buffer
//!
//! `DataBuffer` holds data per channel and serves range queries from it.
//! Anything a query asks for that is not yet held by every channel is fetched
//! from the data source first, one missing segment at a time, in time order.

use super::request::{BufferData, ChannelSpec, Selection};
use super::{BufferError, BufferResult};
use crate::detector::{ChannelList, ChannelResolver, NameResolver};
use crate::segments::{Segment, SegmentList};
use crate::source::{DataSource, FetchOptions, SourceRegistry};
use crate::timeseries::{TimeSeriesDict, TimeSeriesList};

/// Outcome of extending the buffered range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extension {
    /// Data were fetched for this segment and merged in
    Fetched(Segment),
    /// The new bound was not beyond the current one
    Unchanged,
}

/// Channel data cache with fetch-on-demand
pub struct DataBuffer {
    /// Buffered channels, in the order they were added
    channels: ChannelList,
    /// Held data, one list per channel
    data: TimeSeriesDict,
    source: Box<dyn DataSource>,
    resolver: Box<dyn ChannelResolver>,
    /// Buffer was created from a single channel rather than a list
    single: bool,
    /// Name used in log events
    label: String,
}

impl DataBuffer {
    /// Create a buffer over `channels` backed by `source`
    pub fn new(channels: impl Into<ChannelSpec>, source: Box<dyn DataSource>) -> BufferResult<Self> {
        Self::with_resolver(channels, source, Box::new(NameResolver))
    }

    /// Create a buffer resolving channel names with a custom resolver
    pub fn with_resolver(
        channels: impl Into<ChannelSpec>,
        source: Box<dyn DataSource>,
        resolver: Box<dyn ChannelResolver>,
    ) -> BufferResult<Self> {
        let spec = channels.into();
        let single = spec.is_single();
        let channels = spec.resolve(resolver.as_ref())?;
        if channels.is_empty() {
            return Err(BufferError::NoChannels);
        }

        let mut data = TimeSeriesDict::new();
        for channel in &channels {
            data.insert(channel.clone(), TimeSeriesList::new());
        }

        tracing::debug!(
            "Created buffer for {} channel(s) using source {:?}",
            channels.len(),
            source.name()
        );

        Ok(Self {
            channels,
            data,
            source,
            resolver,
            single,
            label: "buffer".to_string(),
        })
    }

    /// Create a buffer using the source registered under `source`
    pub fn from_registry(
        channels: impl Into<ChannelSpec>,
        registry: &SourceRegistry,
        source: &str,
    ) -> BufferResult<Self> {
        let source = registry.create(source)?;
        Self::new(channels, source)
    }

    /// Builder: name this buffer in log output
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn channels(&self) -> &ChannelList {
        &self.channels
    }

    /// Everything currently held, as stored
    pub fn data(&self) -> &TimeSeriesDict {
        &self.data
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Return data for the selected segments, fetching what is missing
    ///
    /// With [`Selection::All`] nothing is fetched and the whole buffer is
    /// returned. Otherwise any part of the selection not held by every
    /// channel is fetched first (when `fetch` is set), then each channel's
    /// data are cropped to the selection and coalesced.
    pub fn get(
        &mut self,
        selection: impl Into<Selection>,
        fetch: bool,
        options: &FetchOptions,
    ) -> BufferResult<BufferData> {
        let Some(requested) = selection.into().into_segments() else {
            let mut current = self.data.clone();
            current.coalesce();
            return Ok(self.package(current));
        };

        let missing = &requested - &self.available();

        if fetch && !missing.is_empty() {
            tracing::debug!(
                "[{}] fetching {} missing segment(s), {}s in total",
                self.label,
                missing.len(),
                missing.abs()
            );
            for segment in &missing {
                self.fill(*segment, options)?;
            }
        }

        let mut out = TimeSeriesDict::new();
        for channel in &self.channels {
            let mut pieces = TimeSeriesList::new();
            if let Some(held) = self.data.get(channel) {
                for series in held {
                    for segment in &requested {
                        // Too short to hold a single sample
                        if segment.duration() < series.dt {
                            continue;
                        }
                        if series.span().intersects(segment) {
                            let cropped = series.crop(segment.start, segment.end);
                            if !cropped.is_empty() {
                                pieces.push(cropped);
                            }
                        }
                    }
                }
            }
            out.insert(channel.clone(), pieces.coalesce());
        }

        Ok(self.package(out))
    }

    fn package(&self, data: TimeSeriesDict) -> BufferData {
        if self.single && self.channels.len() == 1 {
            if let Some((channel, series)) = data.into_iter().next() {
                return BufferData::Series {
                    channel,
                    data: series,
                };
            }
            return BufferData::Dict(TimeSeriesDict::new());
        }
        BufferData::Dict(data)
    }

    /// Time for which every channel holds data
    pub fn available(&self) -> SegmentList {
        self.channels
            .iter()
            .map(|c| {
                self.data
                    .get(c)
                    .map(TimeSeriesList::segments)
                    .unwrap_or_default()
            })
            .reduce(|a, b| &a & &b)
            .unwrap_or_default()
    }

    /// Merge overlapping and contiguous chunks for every channel
    pub fn coalesce(&mut self) {
        self.data.coalesce();
    }

    /// Add freshly fetched data without coalescing
    ///
    /// Data for channels this buffer does not hold are dropped.
    pub fn append(&mut self, new: TimeSeriesDict) {
        for (channel, series) in new {
            if !self.channels.contains(&channel) {
                tracing::warn!("[{}] dropping data for unbuffered channel {}", self.label, channel);
                continue;
            }
            self.data.entry_or_default(&channel).extend(series);
        }
    }

    /// Fetch data for `channels` from the source, without storing it
    pub fn fetch(
        &mut self,
        channels: &ChannelList,
        start: f64,
        end: f64,
        options: &FetchOptions,
    ) -> BufferResult<TimeSeriesDict> {
        tracing::debug!("[{}] fetching {} channel(s) over [{}, {})", self.label, channels.len(), start, end);
        Ok(self.source.fetch(channels, start, end, options)?)
    }

    /// Fetch `segment` for all channels and merge it in
    fn fill(&mut self, segment: Segment, options: &FetchOptions) -> BufferResult<()> {
        let new = self.source.fetch(&self.channels, segment.start, segment.end, options)?;
        self.append(new);
        self.coalesce();
        Ok(())
    }

    /// Union of each channel's first-to-last span
    ///
    /// Gaps inside a channel's data are not reflected here; use
    /// [`available`](Self::available) for exact coverage.
    pub fn segments(&self) -> SegmentList {
        self.data.values().filter_map(TimeSeriesList::span).collect()
    }

    /// Earliest start to latest end over all channels
    pub fn extent(&self) -> Option<Segment> {
        self.segments().extent()
    }

    pub fn start(&self) -> Option<f64> {
        self.extent().map(|e| e.start)
    }

    pub fn end(&self) -> Option<f64> {
        self.extent().map(|e| e.end)
    }

    /// Move the start of the buffered range back to `t`, fetching the gap
    pub fn extend_start(&mut self, t: f64, options: &FetchOptions) -> BufferResult<Extension> {
        if !t.is_finite() {
            return Err(BufferError::InvalidTimeRange(format!("{} is not a finite GPS time", t)));
        }
        let extent = self.extent().ok_or(BufferError::EmptyBuffer)?;

        if t >= extent.end {
            return Err(BufferError::InvalidTimeRange(format!(
                "cannot set start time {} at or after current end time {}",
                t, extent.end
            )));
        }
        if t >= extent.start {
            tracing::warn!(
                "[{}] existing start time {} is before new start time {}, nothing will be done",
                self.label,
                extent.start,
                t
            );
            return Ok(Extension::Unchanged);
        }

        let segment = Segment::new(t, extent.start);
        self.fill(segment, options)?;
        Ok(Extension::Fetched(segment))
    }

    /// Move the end of the buffered range forward to `t`, fetching the gap
    pub fn extend_end(&mut self, t: f64, options: &FetchOptions) -> BufferResult<Extension> {
        if !t.is_finite() {
            return Err(BufferError::InvalidTimeRange(format!("{} is not a finite GPS time", t)));
        }
        let extent = self.extent().ok_or(BufferError::EmptyBuffer)?;

        if t <= extent.start {
            return Err(BufferError::InvalidTimeRange(format!(
                "cannot set end time {} at or before current start time {}",
                t, extent.start
            )));
        }
        if t <= extent.end {
            tracing::warn!(
                "[{}] existing end time {} is after new end time {}, nothing will be done",
                self.label,
                extent.end,
                t
            );
            return Ok(Extension::Unchanged);
        }

        let segment = Segment::new(extent.end, t);
        self.fill(segment, options)?;
        Ok(Extension::Fetched(segment))
    }

    /// Add channels, backfilling them over the already-buffered segments
    ///
    /// Channels already present are ignored. Returns the channels that were
    /// actually added.
    pub fn add_channels(
        &mut self,
        channels: impl Into<ChannelSpec>,
        options: &FetchOptions,
    ) -> BufferResult<ChannelList> {
        let resolved = channels.into().resolve(self.resolver.as_ref())?;

        let mut added = ChannelList::new();
        for channel in resolved {
            if self.channels.push(channel.clone()) {
                self.data.entry_or_default(&channel);
                added.push(channel);
            }
        }

        if added.is_empty() {
            return Ok(added);
        }

        tracing::debug!("[{}] added channels {:?}", self.label, added.names());

        for segment in &self.segments() {
            let new = self.source.fetch(&added, segment.start, segment.end, options)?;
            self.append(new);
        }
        self.coalesce();

        Ok(added)
    }
}

impl std::fmt::Debug for DataBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataBuffer")
            .field("label", &self.label)
            .field("channels", &self.channels.names())
            .field("source", &self.source.name())
            .field("segments", &self.segments())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::detector::Channel;
    use crate::segments::DataQualityFlag;
    use crate::source::{NullSource, SourceError, SourceResult};
    use crate::timeseries::TimeSeries;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Fetch calls seen by a [`Recorder`]: channel names, start, end
    pub(crate) type FetchLog = Rc<RefCell<Vec<(Vec<String>, f64, f64)>>>;

    /// Test source producing 1 Hz ramps and recording every call
    pub(crate) struct Recorder {
        pub log: FetchLog,
        /// Fail on this call number (0-based)
        pub fail_on: Option<usize>,
    }

    impl Recorder {
        pub(crate) fn new() -> (Box<dyn DataSource>, FetchLog) {
            let log = FetchLog::default();
            let source = Recorder {
                log: Rc::clone(&log),
                fail_on: None,
            };
            (Box::new(source), log)
        }
    }

    impl DataSource for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn fetch(
            &mut self,
            channels: &ChannelList,
            start: f64,
            end: f64,
            _options: &FetchOptions,
        ) -> SourceResult<TimeSeriesDict> {
            let call = self.log.borrow().len();
            self.log.borrow_mut().push((channels.names(), start, end));
            if self.fail_on == Some(call) {
                return Err(SourceError::Fetch("archive unavailable".to_string()));
            }

            let mut out = TimeSeriesDict::new();
            for channel in channels {
                let t0 = start.ceil();
                let values = (t0 as i64..end.ceil() as i64).map(|t| t as f64).collect();
                out.push_series(channel, TimeSeries::new(t0, 1.0, values));
            }
            Ok(out)
        }
    }

    fn buffer(channels: impl Into<ChannelSpec>) -> (DataBuffer, FetchLog) {
        let (source, log) = Recorder::new();
        (DataBuffer::new(channels, source).unwrap(), log)
    }

    fn opts() -> FetchOptions {
        FetchOptions::new()
    }

    #[test]
    fn test_get_fetches_missing_and_crops() {
        let (mut buf, log) = buffer(vec!["X1:A-A", "X1:B-B"]);

        let data = buf.get((10.0, 20.0), true, &opts()).unwrap().into_dict();

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].1, 10.0);
        assert_eq!(log.borrow()[0].2, 20.0);
        let a = data.get_by_name("X1:A-A").unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a.as_slice()[0].span(), Segment::new(10.0, 20.0));
        assert_eq!(buf.segments(), SegmentList::from(Segment::new(10.0, 20.0)));
    }

    #[test]
    fn test_no_fetch_when_satisfied() {
        let (mut buf, log) = buffer(vec!["X1:A-A", "X1:B-B"]);
        buf.get((0.0, 100.0), true, &opts()).unwrap();

        let data = buf.get((20.0, 30.0), true, &opts()).unwrap().into_dict();

        assert_eq!(log.borrow().len(), 1);
        let a = &data.get_by_name("X1:B-B").unwrap().as_slice()[0];
        assert_eq!(a.t0, 20.0);
        assert_eq!(a.values, (20..30).map(|v| v as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_only_gaps_are_fetched_in_order() {
        let (mut buf, log) = buffer("X1:A-A");
        buf.get((10.0, 20.0), true, &opts()).unwrap();
        buf.get((30.0, 40.0), true, &opts()).unwrap();

        let series = buf.get((0.0, 50.0), true, &opts()).unwrap().into_series().unwrap();

        let calls: Vec<(f64, f64)> = log.borrow().iter().map(|c| (c.1, c.2)).collect();
        assert_eq!(
            calls,
            vec![(10.0, 20.0), (30.0, 40.0), (0.0, 10.0), (20.0, 30.0), (40.0, 50.0)]
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series.as_slice()[0].span(), Segment::new(0.0, 50.0));
    }

    #[test]
    fn test_available_requires_every_channel() {
        let (mut buf, log) = buffer(vec!["X1:A-A"]);
        buf.get((0.0, 10.0), true, &opts()).unwrap();
        buf.add_channels("X1:B-B", &opts()).unwrap();
        // Give only A more data
        let more = buf
            .fetch(&ChannelList::from_names(&["X1:A-A"]).unwrap(), 10.0, 20.0, &opts())
            .unwrap();
        buf.append(more);
        buf.coalesce();
        log.borrow_mut().clear();

        assert_eq!(buf.available(), SegmentList::from(Segment::new(0.0, 10.0)));
        buf.get((0.0, 20.0), true, &opts()).unwrap();

        let calls = log.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!((calls[0].1, calls[0].2), (10.0, 20.0));
        assert_eq!(calls[0].0, vec!["X1:A-A", "X1:B-B"]);
    }

    #[test]
    fn test_get_without_fetch_returns_held_subset() {
        let (mut buf, log) = buffer("X1:A-A");
        buf.get((0.0, 10.0), true, &opts()).unwrap();

        let series = buf.get((5.0, 15.0), false, &opts()).unwrap().into_series().unwrap();

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(series.as_slice()[0].span(), Segment::new(5.0, 10.0));
    }

    #[test]
    fn test_get_all_does_not_fetch() {
        let (mut buf, log) = buffer(vec!["X1:A-A", "X1:B-B"]);

        let empty = buf.get(Selection::All, true, &opts()).unwrap().into_dict();
        assert_eq!(empty.len(), 2);
        assert!(empty.values().all(TimeSeriesList::is_empty));

        buf.get((0.0, 5.0), true, &opts()).unwrap();
        let all = buf.get(None::<Segment>, true, &opts()).unwrap().into_dict();
        assert_eq!(all.get_by_name("X1:A-A").unwrap().sample_count(), 5);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_segments_shorter_than_a_sample_are_skipped() {
        let (mut buf, _log) = buffer("X1:A-A");
        buf.get((0.0, 10.0), true, &opts()).unwrap();

        let series = buf.get((3.2, 3.7), false, &opts()).unwrap().into_series().unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_flag_selection_uses_active_segments() {
        let (mut buf, log) = buffer("X1:A-A");
        let flag = DataQualityFlag::new("X1:OBSERVING:1")
            .known(Segment::new(0.0, 100.0))
            .active(SegmentList::from_segments([
                Segment::new(10.0, 20.0),
                Segment::new(50.0, 55.0),
            ]));

        let series = buf.get(flag, true, &opts()).unwrap().into_series().unwrap();

        assert_eq!(log.borrow().len(), 2);
        assert_eq!(series.len(), 2);
        assert_eq!(series.sample_count(), 15);
    }

    #[test]
    fn test_single_channel_unwrap() {
        let (mut single, _) = buffer("X1:A-A");
        assert!(single.get((0.0, 1.0), true, &opts()).unwrap().is_series());

        let (mut list_of_one, _) = buffer(vec!["X1:A-A"]);
        assert!(!list_of_one.get((0.0, 1.0), true, &opts()).unwrap().is_series());

        let (mut many, _) = buffer(["X1:A-A", "X1:B-B"]);
        assert!(!many.get((0.0, 1.0), true, &opts()).unwrap().is_series());

        // Adding a channel turns a single-channel buffer into a mapping
        single.add_channels("X1:B-B", &opts()).unwrap();
        assert!(!single.get((0.0, 1.0), true, &opts()).unwrap().is_series());
    }

    #[test]
    fn test_coalesce_is_idempotent() {
        let (mut buf, _) = buffer(vec!["X1:A-A", "X1:B-B"]);
        buf.get((0.0, 10.0), true, &opts()).unwrap();
        let extra = buf
            .fetch(&buf.channels().clone(), 5.0, 15.0, &opts())
            .unwrap();
        buf.append(extra);

        buf.coalesce();
        let once = buf.data().clone();
        buf.coalesce();

        assert_eq!(&once, buf.data());
        assert_eq!(once.get_by_name("X1:A-A").unwrap().len(), 1);
    }

    #[test]
    fn test_add_channels_backfills() {
        let (mut buf, log) = buffer(vec!["X1:A-A"]);
        buf.get((0.0, 10.0), true, &opts()).unwrap();
        log.borrow_mut().clear();

        let added = buf.add_channels("X1:NEW-X", &opts()).unwrap();

        assert_eq!(added.names(), vec!["X1:NEW-X"]);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0], (vec!["X1:NEW-X".to_string()], 0.0, 10.0));
        let x = buf.data().get_by_name("X1:NEW-X").unwrap();
        assert_eq!(x.segments(), SegmentList::from(Segment::new(0.0, 10.0)));
    }

    #[test]
    fn test_add_existing_channel_is_ignored() {
        let (mut buf, log) = buffer(vec!["X1:A-A"]);
        buf.get((0.0, 10.0), true, &opts()).unwrap();

        let added = buf
            .add_channels(vec![Channel::parse("X1:A-A").unwrap()], &opts())
            .unwrap();

        assert!(added.is_empty());
        assert_eq!(buf.channels().len(), 1);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_extension_validation() {
        let (mut buf, log) = buffer("X1:A-A");
        buf.get((100.0, 200.0), true, &opts()).unwrap();
        assert_eq!(buf.start(), Some(100.0));
        assert_eq!(buf.end(), Some(200.0));
        log.borrow_mut().clear();

        assert_eq!(buf.extend_end(150.0, &opts()).unwrap(), Extension::Unchanged);
        assert!(log.borrow().is_empty());

        assert!(matches!(
            buf.extend_start(250.0, &opts()),
            Err(BufferError::InvalidTimeRange(_))
        ));
        assert!(log.borrow().is_empty());

        assert_eq!(
            buf.extend_end(300.0, &opts()).unwrap(),
            Extension::Fetched(Segment::new(200.0, 300.0))
        );
        assert_eq!(log.borrow().len(), 1);
        assert_eq!((log.borrow()[0].1, log.borrow()[0].2), (200.0, 300.0));
        assert_eq!(buf.end(), Some(300.0));
    }

    #[test]
    fn test_extend_start_backwards() {
        let (mut buf, log) = buffer("X1:A-A");
        buf.get((100.0, 200.0), true, &opts()).unwrap();

        assert_eq!(buf.extend_start(120.0, &opts()).unwrap(), Extension::Unchanged);
        assert!(matches!(
            buf.extend_end(50.0, &opts()),
            Err(BufferError::InvalidTimeRange(_))
        ));
        assert_eq!(
            buf.extend_start(50.0, &opts()).unwrap(),
            Extension::Fetched(Segment::new(50.0, 100.0))
        );
        assert_eq!(buf.start(), Some(50.0));
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_empty_buffer_extent() {
        let (buf, _) = buffer(vec!["X1:A-A", "X1:B-B"]);

        assert!(buf.segments().is_empty());
        assert_eq!(buf.extent(), None);
        assert_eq!(buf.start(), None);
        assert!(buf.available().is_empty());
    }

    #[test]
    fn test_extend_rejects_non_finite_bounds() {
        let (mut buf, log) = buffer("X1:A-A");
        buf.get((100.0, 200.0), true, &opts()).unwrap();
        log.borrow_mut().clear();

        for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                buf.extend_start(t, &opts()),
                Err(BufferError::InvalidTimeRange(_))
            ));
            assert!(matches!(
                buf.extend_end(t, &opts()),
                Err(BufferError::InvalidTimeRange(_))
            ));
        }
        assert!(log.borrow().is_empty());
        assert_eq!(buf.extent(), Some(Segment::new(100.0, 200.0)));
    }

    #[test]
    fn test_extend_empty_buffer_fails() {
        let (mut buf, log) = buffer("X1:A-A");

        assert!(matches!(buf.extend_end(10.0, &opts()), Err(BufferError::EmptyBuffer)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_fetch_failure_keeps_earlier_segments() {
        let log = FetchLog::default();
        let source = Recorder {
            log: Rc::clone(&log),
            fail_on: Some(1),
        };
        let mut buf = DataBuffer::new("X1:A-A", Box::new(source)).unwrap();
        let wanted = SegmentList::from_segments([Segment::new(0.0, 10.0), Segment::new(20.0, 30.0)]);

        let err = buf.get(wanted, true, &opts()).unwrap_err();

        assert!(matches!(err, BufferError::Source(SourceError::Fetch(_))));
        assert_eq!(buf.segments(), SegmentList::from(Segment::new(0.0, 10.0)));
    }

    #[test]
    fn test_unimplemented_source() {
        let mut buf = DataBuffer::new("X1:A-A", Box::new(NullSource)).unwrap();

        let err = buf.get((0.0, 1.0), true, &opts()).unwrap_err();
        assert!(matches!(err, BufferError::Source(SourceError::Unimplemented(_))));

        // Nothing requested from the source when not fetching
        assert!(buf.get((0.0, 1.0), false, &opts()).is_ok());
    }

    #[test]
    fn test_foreign_channels_are_dropped() {
        let (mut buf, _) = buffer("X1:A-A");
        let mut foreign = TimeSeriesDict::new();
        foreign.push_series(
            &Channel::parse("X1:OTHER-Z").unwrap(),
            TimeSeries::new(0.0, 1.0, vec![1.0]),
        );

        buf.append(foreign);
        assert_eq!(buf.data().len(), 1);
        assert!(buf.segments().is_empty());
    }

    #[test]
    fn test_registry_construction() {
        let registry = SourceRegistry::default();

        let buf = DataBuffer::from_registry("X1:A-A", &registry, "simulated").unwrap();
        assert_eq!(buf.source_name(), "simulated");

        assert!(matches!(
            DataBuffer::from_registry("X1:A-A", &registry, "nds2"),
            Err(BufferError::Source(SourceError::NotRegistered(_)))
        ));
        assert!(matches!(
            DataBuffer::from_registry(Vec::<String>::new(), &registry, "none"),
            Err(BufferError::NoChannels)
        ));
    }
}
