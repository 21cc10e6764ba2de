//! Data-quality flags

use super::SegmentList;
use serde::{Deserialize, Serialize};

/// A named data-quality flag
///
/// `known` is the time over which the flag state was recorded, `active` the
/// time during which the flag was set. Queries driven by a flag use `active`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQualityFlag {
    pub name: String,
    #[serde(default)]
    pub known: SegmentList,
    #[serde(default)]
    pub active: SegmentList,
}

impl DataQualityFlag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: set the known segments
    pub fn known(mut self, known: impl Into<SegmentList>) -> Self {
        self.known = known.into();
        self
    }

    /// Builder: set the active segments
    pub fn active(mut self, active: impl Into<SegmentList>) -> Self {
        self.active = active.into();
        self
    }

    /// Time where the flag state was recorded but the flag was not set
    pub fn inactive(&self) -> SegmentList {
        &self.known - &self.active
    }

    /// Livetime of the flag in seconds
    pub fn livetime(&self) -> f64 {
        self.active.abs()
    }
}
