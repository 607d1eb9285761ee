// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag --heading-base-level=0

//! Understory Drag: a pointer drag controller for UI elements.
//!
//! This crate turns a stream of start/move/end pointer events into the position of a
//! dragged element. It is split into two layers:
//!
//! - [`local_point`]: normalize mouse, touch, and focus input into a point in the
//!   dragged element's local coordinate space, including elements drawn under a
//!   transform.
//! - [`drag`]: the [`DragController`] state machine, which tracks an anchor and an
//!   offset, applies optional per-axis bounds, and reports each transition to a
//!   [`DragHandler`].
//!
//! The controller does not attach to any widget system. Hosts forward their events,
//! read back [`DragState`] snapshots, and position the element at
//! [`DragState::position`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_drag::local_point::{PointerSample, TargetFrame};
//! use understory_drag::{DragController, DragOptions, Restrict};
//!
//! let canvas = TargetFrame::from_bounds(Rect::new(100.0, 100.0, 500.0, 400.0));
//! let mut drag = DragController::new(DragOptions {
//!     restrict: Restrict { x_max: Some(300.0), ..Restrict::NONE },
//!     ..DragOptions::default()
//! });
//!
//! // Press at client (150, 150): local (50, 50).
//! drag.start(&PointerSample::mouse(Point::new(150.0, 150.0), canvas), &mut ());
//!
//! // Drag far to the right; x stops at the bound.
//! let state = drag
//!     .update(&PointerSample::mouse(Point::new(900.0, 170.0), canvas), &mut ())
//!     .unwrap();
//! assert_eq!(state.position(), Point::new(300.0, 70.0));
//! ```
//!
//! ## Controlled state
//!
//! Set [`DragOptions::controlled`] to let the host own some or all of the state, for
//! example to replay a recorded drag or to cancel one by forcing `is_dragging` off.
//! Controlled values are reconciled before every transition.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` floating-point support through `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`DragState`], [`DragOptions`], and friends.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod local_point;

pub use drag::{
    ControlledPosition, DragController, DragHandler, DragOptions, DragState, HandlerArgs,
    Restrict, clamp,
};
pub use local_point::{DragEvent, PointerInput, PointerSample, TargetFrame};
