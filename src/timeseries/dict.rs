//! Channel-keyed collections of time-series lists

use super::{TimeSeries, TimeSeriesList};
use crate::detector::Channel;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered mapping of channel to its data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesDict {
    entries: Vec<(Channel, TimeSeriesList)>,
}

impl TimeSeriesDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the data for a channel, returning the old data
    pub fn insert(&mut self, channel: Channel, data: TimeSeriesList) -> Option<TimeSeriesList> {
        match self.position(&channel) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, data)),
            None => {
                self.entries.push((channel, data));
                None
            }
        }
    }

    fn position(&self, channel: &Channel) -> Option<usize> {
        self.entries.iter().position(|(c, _)| c == channel)
    }

    pub fn get(&self, channel: &Channel) -> Option<&TimeSeriesList> {
        self.entries.iter().find(|(c, _)| c == channel).map(|(_, d)| d)
    }

    pub fn get_mut(&mut self, channel: &Channel) -> Option<&mut TimeSeriesList> {
        self.entries
            .iter_mut()
            .find(|(c, _)| c == channel)
            .map(|(_, d)| d)
    }

    /// Look up by channel name (with or without type suffix)
    pub fn get_by_name(&self, name: &str) -> Option<&TimeSeriesList> {
        self.entries
            .iter()
            .find(|(c, _)| c.name == name || c.ndsname() == name)
            .map(|(_, d)| d)
    }

    /// Data for a channel, inserting an empty list first if needed
    pub fn entry_or_default(&mut self, channel: &Channel) -> &mut TimeSeriesList {
        let idx = match self.position(channel) {
            Some(idx) => idx,
            None => {
                self.entries.push((channel.clone(), TimeSeriesList::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Add a single chunk to a channel's list
    pub fn push_series(&mut self, channel: &Channel, series: TimeSeries) {
        self.entry_or_default(channel).push(series);
    }

    pub fn contains_key(&self, channel: &Channel) -> bool {
        self.position(channel).is_some()
    }

    /// Concatenate another dict's lists onto this one's, without coalescing
    pub fn append(&mut self, other: TimeSeriesDict) {
        for (channel, data) in other.entries {
            self.entry_or_default(&channel).extend(data);
        }
    }

    /// Coalesce every channel's list in place
    pub fn coalesce(&mut self) {
        for (_, data) in self.entries.iter_mut() {
            *data = std::mem::take(data).coalesce();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Channel> {
        self.entries.iter().map(|(c, _)| c)
    }

    pub fn values(&self) -> impl Iterator<Item = &TimeSeriesList> {
        self.entries.iter().map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Channel, &TimeSeriesList)> {
        self.entries.iter().map(|(c, d)| (c, d))
    }
}

impl FromIterator<(Channel, TimeSeriesList)> for TimeSeriesDict {
    fn from_iter<I: IntoIterator<Item = (Channel, TimeSeriesList)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (channel, data) in iter {
            dict.entry_or_default(&channel).extend(data);
        }
        dict
    }
}

impl IntoIterator for TimeSeriesDict {
    type Item = (Channel, TimeSeriesList);
    type IntoIter = std::vec::IntoIter<(Channel, TimeSeriesList)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for TimeSeriesDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (channel, data) in &self.entries {
            map.serialize_entry(&channel.ndsname(), data)?;
        }
        map.end()
    }
}
