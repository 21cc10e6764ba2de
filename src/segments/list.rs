//! Normalized segment lists and their set algebra
//!
//! A `SegmentList` is always kept sorted, with no two members overlapping or
//! touching. Every constructor and every set operation restores that form
//! before returning, so callers never see an un-coalesced list.

use super::Segment;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Sub};

/// Sorted, coalesced collection of segments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct SegmentList {
    segments: Vec<Segment>,
}

impl SegmentList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a normalized list from arbitrary segments
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let mut segments: Vec<Segment> = segments.into_iter().filter(|s| !s.is_empty()).collect();
        segments.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
        for seg in segments {
            match merged.last_mut() {
                Some(last) if seg.start <= last.end => {
                    last.end = last.end.max(seg.end);
                }
                _ => merged.push(seg),
            }
        }

        Self { segments: merged }
    }

    /// Add a segment, merging it with any member it touches
    pub fn push(&mut self, segment: Segment) {
        let mut all = std::mem::take(&mut self.segments);
        all.push(segment);
        *self = Self::from_segments(all);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Total time covered, in seconds
    pub fn abs(&self) -> f64 {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// Smallest segment containing every member, None when empty
    pub fn extent(&self) -> Option<Segment> {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => Some(Segment::new(first.start, last.end)),
            _ => None,
        }
    }

    /// True if a single member fully contains `segment`
    pub fn contains(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|s| s.contains(segment))
    }

    /// True if any member overlaps `segment`
    pub fn intersects(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|s| s.intersects(segment))
    }

    /// Set union
    pub fn union(&self, other: &SegmentList) -> Self {
        Self::from_segments(self.segments.iter().chain(other.segments.iter()).copied())
    }

    /// Set intersection
    pub fn intersection(&self, other: &SegmentList) -> Self {
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.segments.len() && j < other.segments.len() {
            let a = self.segments[i];
            let b = other.segments[j];

            if let Some(common) = a.intersection(&b) {
                out.push(common);
            }

            // Advance whichever ends first
            if a.end <= b.end {
                i += 1;
            } else {
                j += 1;
            }
        }

        Self::from_segments(out)
    }

    /// Set difference: time in `self` not covered by `other`
    pub fn difference(&self, other: &SegmentList) -> Self {
        let mut out = Vec::new();
        let mut j = 0;

        for seg in &self.segments {
            let mut cursor = seg.start;

            // Skip subtrahends that end before this segment starts
            while j < other.segments.len() && other.segments[j].end <= seg.start {
                j += 1;
            }

            let mut k = j;
            while k < other.segments.len() && other.segments[k].start < seg.end {
                let cut = other.segments[k];
                if cut.start > cursor {
                    out.push(Segment::new(cursor, cut.start));
                }
                cursor = cursor.max(cut.end);
                k += 1;
            }

            if cursor < seg.end {
                out.push(Segment::new(cursor, seg.end));
            }
        }

        Self::from_segments(out)
    }
}

impl From<Segment> for SegmentList {
    fn from(segment: Segment) -> Self {
        Self::from_segments([segment])
    }
}

impl From<Vec<Segment>> for SegmentList {
    fn from(segments: Vec<Segment>) -> Self {
        Self::from_segments(segments)
    }
}

impl From<SegmentList> for Vec<Segment> {
    fn from(list: SegmentList) -> Self {
        list.segments
    }
}

impl FromIterator<Segment> for SegmentList {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl IntoIterator for SegmentList {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a SegmentList {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl BitOr for &SegmentList {
    type Output = SegmentList;

    fn bitor(self, rhs: Self) -> SegmentList {
        self.union(rhs)
    }
}

impl BitAnd for &SegmentList {
    type Output = SegmentList;

    fn bitand(self, rhs: Self) -> SegmentList {
        self.intersection(rhs)
    }
}

impl Sub for &SegmentList {
    type Output = SegmentList;

    fn sub(self, rhs: Self) -> SegmentList {
        self.difference(rhs)
    }
}

impl std::fmt::Display for SegmentList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", seg)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(pairs: &[(f64, f64)]) -> SegmentList {
        pairs.iter().map(|&(s, e)| Segment::new(s, e)).collect()
    }

    #[test]
    fn test_normalization_merges_overlap_and_adjacency() {
        let segs = list(&[(5.0, 8.0), (0.0, 2.0), (2.0, 4.0), (7.0, 10.0), (3.0, 3.0)]);

        assert_eq!(segs.as_slice(), &[Segment::new(0.0, 4.0), Segment::new(5.0, 10.0)]);
    }

    #[test]
    fn test_union() {
        let a = list(&[(0.0, 2.0), (10.0, 12.0)]);
        let b = list(&[(1.0, 5.0), (12.0, 13.0)]);

        assert_eq!(&a | &b, list(&[(0.0, 5.0), (10.0, 13.0)]));
    }

    #[test]
    fn test_intersection() {
        let a = list(&[(0.0, 10.0), (20.0, 30.0)]);
        let b = list(&[(5.0, 25.0)]);

        assert_eq!(&a & &b, list(&[(5.0, 10.0), (20.0, 25.0)]));
        assert!((&a & &SegmentList::new()).is_empty());
    }

    #[test]
    fn test_difference() {
        let a = list(&[(0.0, 10.0), (20.0, 30.0)]);
        let b = list(&[(2.0, 4.0), (8.0, 22.0), (25.0, 26.0)]);

        assert_eq!(
            &a - &b,
            list(&[(0.0, 2.0), (4.0, 8.0), (22.0, 25.0), (26.0, 30.0)])
        );
        assert_eq!(&a - &SegmentList::new(), a);
        assert!((&a - &list(&[(-1.0, 40.0)])).is_empty());
    }

    #[test]
    fn test_extent_and_abs() {
        let segs = list(&[(0.0, 2.0), (10.0, 12.0)]);

        assert_eq!(segs.extent(), Some(Segment::new(0.0, 12.0)));
        assert_eq!(segs.abs(), 4.0);
        assert_eq!(SegmentList::new().extent(), None);
    }

    #[test]
    fn test_contains() {
        let segs = list(&[(0.0, 10.0), (20.0, 30.0)]);

        assert!(segs.contains(&Segment::new(2.0, 8.0)));
        assert!(!segs.contains(&Segment::new(8.0, 22.0)));
        assert!(segs.intersects(&Segment::new(8.0, 22.0)));
    }

    #[test]
    fn test_push_keeps_list_coalesced() {
        let mut segs = list(&[(0.0, 1.0), (2.0, 3.0)]);
        segs.push(Segment::new(1.0, 2.0));

        assert_eq!(segs, list(&[(0.0, 3.0)]));
    }

    #[test]
    fn test_serde_normalizes() {
        let segs: SegmentList =
            serde_json::from_str(r#"[{"start":4.0,"end":6.0},{"start":0.0,"end":5.0}]"#).unwrap();

        assert_eq!(segs, list(&[(0.0, 6.0)]));
    }
}
