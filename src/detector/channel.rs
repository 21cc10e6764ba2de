//! Channel descriptors and name resolution
//!
//! Channel names follow the `IFO:SYSTEM-SUBSYSTEM_SIGNAL.trend,type`
//! convention, e.g. `L1:IMC-PWR_IN_OUT_DQ` or
//! `H1:GDS-CALIB_STRAIN.mean,m-trend`. Everything after the system is
//! optional. Names outside the convention are still accepted, they just
//! resolve without parsed components.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur while resolving channels
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChannelError {
    /// Blank channel name
    #[error("Channel name is empty")]
    Empty,

    /// Resolver rejected the name
    #[error("Cannot resolve channel {name:?}: {reason}")]
    Unresolved { name: String, reason: String },
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<ifo>[A-Z][0-9]):(?P<system>[A-Za-z0-9]+)(?:-(?P<subsystem>[A-Za-z0-9]+))?(?:_(?P<signal>[A-Za-z0-9_\-]+?))?(?:\.(?P<trend>[a-z]+))?(?:,(?P<ctype>(?:[a-z]-)?[a-z]+))?$",
        )
        .expect("channel name pattern is valid")
    })
}

/// One named detector data stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Name without the type suffix (e.g. `L1:IMC-PWR_IN_OUT_DQ.mean`)
    pub name: String,
    pub ifo: Option<String>,
    pub system: Option<String>,
    pub subsystem: Option<String>,
    pub signal: Option<String>,
    /// Trend statistic (`mean`, `min`, `max`, `rms`, `n`)
    pub trend: Option<String>,
    /// Channel type suffix (`m-trend`, `s-trend`, `online`, ...)
    pub channel_type: Option<String>,
    /// Sample rate in Hz, when known
    #[serde(default)]
    pub sample_rate: Option<f64>,
}

impl Channel {
    /// Parse a channel name
    pub fn parse(name: &str) -> Result<Self, ChannelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChannelError::Empty);
        }

        let Some(caps) = name_pattern().captures(name) else {
            return Ok(Self::opaque(name));
        };
        let group = |key: &str| caps.name(key).map(|m| m.as_str().to_string());

        let channel_type = group("ctype");
        let base = match name.split_once(',') {
            Some((base, _)) => base.to_string(),
            None => name.to_string(),
        };

        Ok(Self {
            name: base,
            ifo: group("ifo"),
            system: group("system"),
            subsystem: group("subsystem"),
            signal: group("signal"),
            trend: group("trend"),
            channel_type,
            sample_rate: None,
        })
    }

    /// A channel whose name carries no parseable structure
    fn opaque(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ifo: None,
            system: None,
            subsystem: None,
            signal: None,
            trend: None,
            channel_type: None,
            sample_rate: None,
        }
    }

    /// Builder: set the sample rate
    pub fn with_sample_rate(mut self, rate: f64) -> Self {
        self.sample_rate = Some(rate);
        self
    }

    /// Full name including the type suffix, as used by NDS servers
    pub fn ndsname(&self) -> String {
        match &self.channel_type {
            Some(ctype) => format!("{},{}", self.name, ctype),
            None => self.name.clone(),
        }
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.channel_type == other.channel_type
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.channel_type.hash(state);
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ndsname())
    }
}

impl std::str::FromStr for Channel {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Maps channel names to descriptors
pub trait ChannelResolver {
    fn resolve(&self, name: &str) -> Result<Channel, ChannelError>;
}

/// Resolver that derives everything from the name itself
#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver;

impl ChannelResolver for NameResolver {
    fn resolve(&self, name: &str) -> Result<Channel, ChannelError> {
        Channel::parse(name)
    }
}

/// Ordered, duplicate-free set of channels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelList {
    channels: Vec<Channel>,
}

impl ChannelList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve each name with the default resolver
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ChannelError> {
        Self::resolve_with(&NameResolver, names)
    }

    /// Resolve each name with the given resolver, dropping duplicates
    pub fn resolve_with<R, S>(resolver: &R, names: &[S]) -> Result<Self, ChannelError>
    where
        R: ChannelResolver + ?Sized,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for name in names {
            list.push(resolver.resolve(name.as_ref())?);
        }
        Ok(list)
    }

    /// Append a channel; returns false if an equal channel is already present
    pub fn push(&mut self, channel: Channel) -> bool {
        if self.contains(&channel) {
            return false;
        }
        self.channels.push(channel);
        true
    }

    pub fn contains(&self, channel: &Channel) -> bool {
        self.channels.iter().any(|c| c == channel)
    }

    /// Look up a channel by name (with or without type suffix)
    pub fn find(&self, name: &str) -> Option<&Channel> {
        self.channels
            .iter()
            .find(|c| c.name == name || c.ndsname() == name)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Channel> {
        self.channels.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.channels.iter().map(Channel::ndsname).collect()
    }
}

impl FromIterator<Channel> for ChannelList {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut list = Self::new();
        for channel in iter {
            list.push(channel);
        }
        list
    }
}

impl<'a> IntoIterator for &'a ChannelList {
    type Item = &'a Channel;
    type IntoIter = std::slice::Iter<'a, Channel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.iter()
    }
}

impl IntoIterator for ChannelList {
    type Item = Channel;
    type IntoIter = std::vec::IntoIter<Channel>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.into_iter()
    }
}
