//! # Match Offsets

use core::ops::Range;

use crate::PregResult;

/// Flat per-match group offsets.
///
/// Laid out as ``(capture_count + 1) * 3`` slots; the first two thirds
/// hold a ``(start, end)`` pair per group, and the last third is reserved
/// engine workspace. Group 0 is the whole match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOffsets {
    slots: Vec<Option<usize>>,
}

impl MatchOffsets {
    /// Allocate offsets for a pattern with `capture_count` groups.
    ///
    /// ## Returns
    /// The offsets, or [`crate::PregError::OutOfMemory`].
    pub fn for_capture_count(capture_count: usize) -> PregResult<Self> {
        Self::with_group_capacity(capture_count.saturating_add(1))
    }

    /// Allocate offsets able to hold `groups` groups.
    ///
    /// Zero is bumped to one; the whole match always fits.
    pub fn with_group_capacity(groups: usize) -> PregResult<Self> {
        let len = groups.max(1).saturating_mul(3);
        let mut slots = Vec::new();
        slots.try_reserve_exact(len)?;
        slots.resize(len, None);
        Ok(Self { slots })
    }

    /// The total slot count.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Are there no slots?
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// How many groups can be recorded.
    pub fn group_capacity(&self) -> usize {
        self.slots.len() / 3
    }

    /// Unset every group.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// Record group `group`; ignored past capacity.
    pub fn set_group(
        &mut self,
        group: usize,
        range: Range<usize>,
    ) {
        if group < self.group_capacity() {
            self.slots[2 * group] = Some(range.start);
            self.slots[2 * group + 1] = Some(range.end);
        }
    }

    /// The span of group `group`, if it participated.
    pub fn group(
        &self,
        group: usize,
    ) -> Option<Range<usize>> {
        if group >= self.group_capacity() {
            return None;
        }
        match (self.slots[2 * group], self.slots[2 * group + 1]) {
            (Some(start), Some(end)) => Some(start..end),
            _ => None,
        }
    }
}
