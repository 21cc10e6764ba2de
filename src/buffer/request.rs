//! Query inputs and outputs for [`DataBuffer`](super::DataBuffer)

use super::{BufferError, BufferResult};
use crate::detector::{Channel, ChannelList, ChannelResolver};
use crate::segments::{DataQualityFlag, Segment, SegmentList};
use crate::time::to_gps;
use crate::timeseries::{TimeSeriesDict, TimeSeriesList};
use serde::Serialize;

/// A channel given by name or already resolved
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelInput {
    Name(String),
    Resolved(Channel),
}

impl ChannelInput {
    fn resolve<R: ChannelResolver + ?Sized>(self, resolver: &R) -> BufferResult<Channel> {
        match self {
            ChannelInput::Name(name) => Ok(resolver.resolve(&name)?),
            ChannelInput::Resolved(channel) => Ok(channel),
        }
    }
}

impl From<&str> for ChannelInput {
    fn from(name: &str) -> Self {
        ChannelInput::Name(name.to_string())
    }
}

impl From<String> for ChannelInput {
    fn from(name: String) -> Self {
        ChannelInput::Name(name)
    }
}

impl From<&String> for ChannelInput {
    fn from(name: &String) -> Self {
        ChannelInput::Name(name.clone())
    }
}

impl From<Channel> for ChannelInput {
    fn from(channel: Channel) -> Self {
        ChannelInput::Resolved(channel)
    }
}

/// How channels were handed to a buffer
///
/// A single channel (not wrapped in a list) makes [`DataBuffer::get`]
/// return that channel's data directly instead of a mapping.
///
/// [`DataBuffer::get`]: super::DataBuffer::get
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelSpec {
    One(ChannelInput),
    Many(Vec<ChannelInput>),
}

impl ChannelSpec {
    pub fn is_single(&self) -> bool {
        matches!(self, ChannelSpec::One(_))
    }

    /// Resolve every entry, dropping duplicates
    pub fn resolve<R: ChannelResolver + ?Sized>(self, resolver: &R) -> BufferResult<ChannelList> {
        let inputs = match self {
            ChannelSpec::One(input) => vec![input],
            ChannelSpec::Many(inputs) => inputs,
        };

        let mut list = ChannelList::new();
        for input in inputs {
            list.push(input.resolve(resolver)?);
        }
        Ok(list)
    }
}

impl From<&str> for ChannelSpec {
    fn from(name: &str) -> Self {
        ChannelSpec::One(name.into())
    }
}

impl From<String> for ChannelSpec {
    fn from(name: String) -> Self {
        ChannelSpec::One(name.into())
    }
}

impl From<Channel> for ChannelSpec {
    fn from(channel: Channel) -> Self {
        ChannelSpec::One(channel.into())
    }
}

impl<T: Into<ChannelInput>> From<Vec<T>> for ChannelSpec {
    fn from(inputs: Vec<T>) -> Self {
        ChannelSpec::Many(inputs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ChannelInput>, const N: usize> From<[T; N]> for ChannelSpec {
    fn from(inputs: [T; N]) -> Self {
        ChannelSpec::Many(inputs.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ChannelSpec {
    fn from(names: &[&str]) -> Self {
        ChannelSpec::Many(names.iter().map(|&n| n.into()).collect())
    }
}

impl From<ChannelList> for ChannelSpec {
    fn from(list: ChannelList) -> Self {
        ChannelSpec::Many(list.into_iter().map(Into::into).collect())
    }
}

/// Which stretches of time a query asks for
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    /// Whatever is currently buffered
    #[default]
    All,
    Segment(Segment),
    /// The active segments of a data-quality flag
    Flag(DataQualityFlag),
    List(SegmentList),
}

impl Selection {
    /// Build a selection from two time strings, see [`to_gps`]
    pub fn from_times(start: &str, end: &str) -> BufferResult<Self> {
        let start = to_gps(start)?;
        let end = to_gps(end)?;
        Segment::try_new(start, end)
            .map(Selection::Segment)
            .ok_or_else(|| {
                BufferError::InvalidTimeRange(format!("start {} is after end {}", start, end))
            })
    }

    /// Normalized segments, or None for [`Selection::All`]
    pub fn into_segments(self) -> Option<SegmentList> {
        match self {
            Selection::All => None,
            Selection::Segment(segment) => Some(SegmentList::from(segment)),
            Selection::Flag(flag) => Some(flag.active),
            Selection::List(list) => Some(list),
        }
    }
}

impl From<Segment> for Selection {
    fn from(segment: Segment) -> Self {
        Selection::Segment(segment)
    }
}

/// # Panics
/// Panics if start > end
impl From<(f64, f64)> for Selection {
    fn from((start, end): (f64, f64)) -> Self {
        Selection::Segment(Segment::new(start, end))
    }
}

impl From<SegmentList> for Selection {
    fn from(list: SegmentList) -> Self {
        Selection::List(list)
    }
}

impl From<DataQualityFlag> for Selection {
    fn from(flag: DataQualityFlag) -> Self {
        Selection::Flag(flag)
    }
}

impl<T: Into<Selection>> From<Option<T>> for Selection {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Result of a buffer query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BufferData {
    /// Data for the buffer's only channel, when it was given on its own
    Series {
        channel: Channel,
        data: TimeSeriesList,
    },
    Dict(TimeSeriesDict),
}

impl BufferData {
    pub fn is_series(&self) -> bool {
        matches!(self, BufferData::Series { .. })
    }

    /// The bare series, if this is a single-channel result
    pub fn into_series(self) -> Option<TimeSeriesList> {
        match self {
            BufferData::Series { data, .. } => Some(data),
            BufferData::Dict(_) => None,
        }
    }

    /// Channel-keyed view of either shape
    pub fn into_dict(self) -> TimeSeriesDict {
        match self {
            BufferData::Series { channel, data } => {
                let mut dict = TimeSeriesDict::new();
                dict.insert(channel, data);
                dict
            }
            BufferData::Dict(dict) => dict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::NameResolver;

    #[test]
    fn test_channel_spec_shapes() {
        assert!(ChannelSpec::from("X1:A-B").is_single());
        assert!(!ChannelSpec::from(vec!["X1:A-B"]).is_single());
        assert!(!ChannelSpec::from(["X1:A-B", "X1:C-D"]).is_single());

        let list = ChannelSpec::from(vec!["X1:A-B", "X1:A-B", "X1:C-D"])
            .resolve(&NameResolver)
            .unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_selection_from_times() {
        let selection = Selection::from_times("1980-01-06", "10").unwrap();
        assert_eq!(selection, Selection::Segment(Segment::new(0.0, 10.0)));

        assert!(matches!(
            Selection::from_times("20", "10"),
            Err(BufferError::InvalidTimeRange(_))
        ));
        assert!(matches!(
            Selection::from_times("soon", "10"),
            Err(BufferError::Time(_))
        ));
    }

    #[test]
    fn test_selection_into_segments() {
        assert_eq!(Selection::All.into_segments(), None);
        assert_eq!(Selection::from(None::<Segment>), Selection::All);

        let flag = DataQualityFlag::new("X1:FLAG:1")
            .known(Segment::new(0.0, 100.0))
            .active(Segment::new(10.0, 20.0));
        assert_eq!(
            Selection::from(flag).into_segments(),
            Some(SegmentList::from(Segment::new(10.0, 20.0)))
        );
    }
}
