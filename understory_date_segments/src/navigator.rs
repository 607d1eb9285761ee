// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation across date segments.
//!
//! [`SegmentNavigator`] tracks which segment of a formatted date has focus and turns
//! directional keys into either a focus move or a value adjustment:
//!
//! - [`DirectionalKey::Next`] / [`DirectionalKey::Previous`] move focus to the
//!   adjacent focusable segment, skipping literals. At either end the result is
//!   [`NavigationResult::Boundary`]; navigation does not wrap.
//! - [`DirectionalKey::Increment`] / [`DirectionalKey::Decrement`] step the field of
//!   the focused segment by one unit (see [`adjust()`](crate::adjust())) and report the
//!   new value. The navigator never stores the value; the caller owns it.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_date_segments::{
//!     DirectionalKey, FormatOptions, NavigationResult, PatternFormatter, SegmentNavigator,
//!     compute_segments,
//! };
//!
//! let value = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let formatter = PatternFormatter::new(FormatOptions::iso().date_only());
//!
//! // "2021" "-" "01" "-" "31"
//! let mut nav = SegmentNavigator::new();
//! nav.set_segments(compute_segments(&value, &formatter));
//!
//! nav.on_segment_focused(0);
//! assert_eq!(nav.on_directional_key(DirectionalKey::Next, value), NavigationResult::Moved(2));
//!
//! // Increment the month.
//! let next = NaiveDate::from_ymd_opt(2021, 3, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! assert_eq!(
//!     nav.on_directional_key(DirectionalKey::Increment, value),
//!     NavigationResult::Adjusted(next),
//! );
//! ```

use alloc::vec::Vec;

use chrono::NaiveDateTime;

use crate::adjust::adjust;
use crate::registry::{FocusHandle, FocusRegistry};
use crate::segment::DateSegment;

/// Directional input understood by the navigator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DirectionalKey {
    /// Move focus to the next segment.
    Next,
    /// Move focus to the previous segment.
    Previous,
    /// Step the focused field up.
    Increment,
    /// Step the focused field down.
    Decrement,
}

impl DirectionalKey {
    /// Map a key name (`ArrowRight`, `ArrowLeft`, `ArrowUp`, `ArrowDown`) to a key.
    #[must_use]
    pub fn from_key(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowUp" => Some(Self::Increment),
            "ArrowDown" => Some(Self::Decrement),
            _ => None,
        }
    }
}

/// Outcome of a directional key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavigationResult {
    /// Focus moved to the segment at this index.
    Moved(usize),
    /// Focus is already on the first or last focusable segment.
    Boundary,
    /// The focused field was stepped; this is the new value.
    Adjusted(NaiveDateTime),
    /// A field is focused but it cannot be stepped (an era, or a step that would
    /// leave the representable range). The value is unchanged.
    Unadjustable,
    /// Nothing happened.
    Unchanged,
}

impl NavigationResult {
    /// Returns `true` if the key was consumed, so the host should suppress its default action.
    ///
    /// Boundary hits and [`Unadjustable`](Self::Unadjustable) fields count as consumed: the
    /// key was meant for the picker even though nothing changed.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Focus tracking and key handling over a segment sequence.
///
/// `H` is the focus handle type kept in the navigator's [`FocusRegistry`]; use `()` (the
/// default) when the host moves focus itself based on [`NavigationResult::Moved`].
#[derive(Clone, Debug)]
pub struct SegmentNavigator<H = ()> {
    segments: Vec<DateSegment>,
    /// Indices of non-literal segments, in display order.
    focusable: Vec<usize>,
    focused: Option<usize>,
    handles: FocusRegistry<H>,
}

impl Default for SegmentNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentNavigator {
    /// Create a navigator without focus handles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_handles()
    }
}

impl<H: FocusHandle> SegmentNavigator<H> {
    /// Create an empty, unfocused navigator that focuses through registered handles.
    #[must_use]
    pub fn with_handles() -> Self {
        Self {
            segments: Vec::new(),
            focusable: Vec::new(),
            focused: None,
            handles: FocusRegistry::new(),
        }
    }

    /// Replace the segment sequence.
    ///
    /// Focus is kept when the focused index still names a focusable segment and cleared
    /// otherwise. Handles registered at indices that are no longer focusable are dropped.
    pub fn set_segments(&mut self, segments: Vec<DateSegment>) {
        self.focusable = segments
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.is_focusable().then_some(i))
            .collect();
        self.segments = segments;
        if let Some(index) = self.focused
            && !self.is_focusable(index)
        {
            log::trace!("focused segment {index} no longer focusable");
            self.focused = None;
        }
        let segments = &self.segments;
        self.handles
            .retain(|index, _| segments.get(index).is_some_and(DateSegment::is_focusable));
    }

    /// Current segments.
    #[must_use]
    pub fn segments(&self) -> &[DateSegment] {
        &self.segments
    }

    /// Indices of focusable segments in display order.
    #[must_use]
    pub fn focusable_indices(&self) -> &[usize] {
        &self.focusable
    }

    /// Returns `true` if the segment at `index` exists and is not a literal.
    #[must_use]
    pub fn is_focusable(&self, index: usize) -> bool {
        self.segments.get(index).is_some_and(DateSegment::is_focusable)
    }

    /// Index of the focused segment.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// The focused segment.
    #[must_use]
    pub fn focused_segment(&self) -> Option<&DateSegment> {
        self.focused.and_then(|i| self.segments.get(i))
    }

    /// Registered focus handles.
    #[must_use]
    pub fn handles(&self) -> &FocusRegistry<H> {
        &self.handles
    }

    /// Registered focus handles, mutably.
    pub fn handles_mut(&mut self) -> &mut FocusRegistry<H> {
        &mut self.handles
    }

    /// Register the focus handle for segment `index`.
    ///
    /// Literal segments never take focus, so registering one is refused and returns
    /// `false`.
    pub fn register_handle(&mut self, index: usize, handle: H) -> bool {
        if !self.is_focusable(index) {
            return false;
        }
        self.handles.register(index, handle);
        true
    }

    /// Record that the segment at `index` received focus.
    ///
    /// Ignored, returning `false`, when `index` is out of range or names a literal.
    pub fn on_segment_focused(&mut self, index: usize) -> bool {
        if !self.is_focusable(index) {
            log::trace!("ignoring focus on non-focusable segment {index}");
            return false;
        }
        self.focused = Some(index);
        true
    }

    /// Record that focus left the segments.
    pub fn on_blur(&mut self) {
        self.focused = None;
    }

    /// Move focus to the next focusable segment.
    ///
    /// With nothing focused, focuses the first focusable segment.
    pub fn focus_next(&mut self) -> NavigationResult {
        let target = match self.focused_position() {
            Some(pos) if pos + 1 < self.focusable.len() => Some(self.focusable[pos + 1]),
            Some(_) => None,
            None => self.focusable.first().copied(),
        };
        self.move_to(target)
    }

    /// Move focus to the previous focusable segment.
    ///
    /// With nothing focused, focuses the last focusable segment.
    pub fn focus_previous(&mut self) -> NavigationResult {
        let target = match self.focused_position() {
            Some(pos) if pos > 0 => Some(self.focusable[pos - 1]),
            Some(_) => None,
            None => self.focusable.last().copied(),
        };
        self.move_to(target)
    }

    /// Handle a directional key against the caller-owned `current` value.
    pub fn on_directional_key(
        &mut self,
        key: DirectionalKey,
        current: NaiveDateTime,
    ) -> NavigationResult {
        match key {
            DirectionalKey::Next => self.focus_next(),
            DirectionalKey::Previous => self.focus_previous(),
            DirectionalKey::Increment => self.adjust_focused(current, 1),
            DirectionalKey::Decrement => self.adjust_focused(current, -1),
        }
    }

    fn adjust_focused(&self, current: NaiveDateTime, change: i32) -> NavigationResult {
        let Some(segment) = self.focused_segment() else {
            return NavigationResult::Unchanged;
        };
        match adjust(current, segment.kind, change) {
            Some(value) => NavigationResult::Adjusted(value),
            None => NavigationResult::Unadjustable,
        }
    }

    fn focused_position(&self) -> Option<usize> {
        let index = self.focused?;
        self.focusable.iter().position(|&i| i == index)
    }

    fn move_to(&mut self, target: Option<usize>) -> NavigationResult {
        let Some(index) = target else {
            log::trace!("segment navigation hit boundary at {:?}", self.focused);
            return NavigationResult::Boundary;
        };
        self.focused = Some(index);
        self.handles.focus(index);
        NavigationResult::Moved(index)
    }
}
