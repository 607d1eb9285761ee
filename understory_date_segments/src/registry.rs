// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-addressable registry of focusable handles.
//!
//! The host renders one interactive element per focusable segment. To move native
//! focus when the user presses an arrow key, the navigator needs a way to say
//! "focus segment 4" without knowing what an element is. Hosts register a
//! [`FocusHandle`] per segment index and the navigator calls it.
//!
//! ```
//! use understory_date_segments::FocusRegistry;
//!
//! let mut focused = Vec::new();
//! {
//!     let mut registry = FocusRegistry::new();
//!     registry.register(2, || focused.push(2));
//!     assert!(registry.focus(2));
//!     assert!(!registry.focus(3));
//! }
//! assert_eq!(focused, [2]);
//! ```

use alloc::vec::Vec;

/// Something that can take input focus.
pub trait FocusHandle {
    /// Move input focus to this handle.
    fn focus(&mut self);
}

/// Focus handles that do nothing, for hosts that track focus themselves.
impl FocusHandle for () {
    fn focus(&mut self) {}
}

impl<F: FnMut()> FocusHandle for F {
    fn focus(&mut self) {
        self();
    }
}

/// Handles keyed by segment index.
#[derive(Clone, Debug)]
pub struct FocusRegistry<H> {
    slots: Vec<Option<H>>,
}

impl<H> Default for FocusRegistry<H> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<H> FocusRegistry<H> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` for `index`, returning the handle it replaced.
    pub fn register(&mut self, index: usize, handle: H) -> Option<H> {
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(handle)
    }

    /// Remove and return the handle for `index`.
    pub fn unregister(&mut self, index: usize) -> Option<H> {
        let removed = self.slots.get_mut(index).and_then(Option::take);
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        removed
    }

    /// The handle registered for `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&H> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns `true` if a handle is registered for `index`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Number of registered handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no handles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Keep only the handles for which `keep(index, &mut handle)` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(usize, &mut H) -> bool) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(handle) = slot.as_mut()
                && !keep(index, handle)
            {
                *slot = None;
            }
        }
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
    }

    /// Drop every handle.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<H: FocusHandle> FocusRegistry<H> {
    /// Focus the handle for `index`. Returns `false` if none is registered.
    pub fn focus(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index).and_then(Option::as_mut) {
            Some(handle) => {
                handle.focus();
                true
            }
            None => false,
        }
    }
}
