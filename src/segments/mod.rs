//! Segment algebra
//!
//! This module provides the interval types used to describe which stretches
//! of GPS time a buffer holds or a caller wants:
//!
//! - **segment**: `Segment`, a half-open `[start, end)` interval
//! - **list**: `SegmentList`, a normalized set of segments with union,
//!   intersection and difference
//! - **flag**: `DataQualityFlag`, named known/active segment lists

pub mod flag;
pub mod list;
pub mod segment;

pub use flag::DataQualityFlag;
pub use list::SegmentList;
pub use segment::Segment;
