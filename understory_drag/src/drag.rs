// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: track a dragged element's anchor and offset across start, move, and end.
//!
//! ## Model
//!
//! A drag is described by a [`DragState`]: an anchor (`x`, `y`) fixed when the drag
//! starts and an offset (`dx`, `dy`) that accumulates while the pointer moves. The
//! element's current position is always `anchor + offset`.
//!
//! [`DragController`] moves between two states:
//!
//! - **Idle → Dragging** on [`DragController::start`].
//! - **Dragging → Dragging** on [`DragController::update`] (offset changes only).
//! - **Dragging → Idle** on [`DragController::end`]. The offset is kept as the committed
//!   position; it is not reset.
//!
//! Move and end events that arrive while idle are ignored, so hosts can forward every
//! pointer event without tracking call order themselves.
//!
//! ## Options
//!
//! - `snap_to_pointer` (default `true`): the anchor jumps to the pointer on start.
//!   Otherwise the distance between pointer and element is captured and preserved.
//! - `reset_on_start` (default `false`): zero the offset on start instead of folding
//!   it into the anchor.
//! - `restrict`: per-axis bounds applied to the anchor and to every move.
//! - `controlled`: externally owned values that override internal tracking (see
//!   [`ControlledPosition`]).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_drag::{DragController, DragOptions};
//!
//! let mut drag = DragController::new(DragOptions::default());
//!
//! let started = drag.start(&Point::new(10.0, 10.0), &mut ());
//! assert_eq!((started.x, started.y), (Some(10.0), Some(10.0)));
//!
//! let moved = drag.update(&Point::new(15.0, 12.0), &mut ()).unwrap();
//! assert_eq!((moved.dx, moved.dy), (5.0, 2.0));
//!
//! let ended = drag.end(&Point::new(15.0, 12.0), &mut ()).unwrap();
//! assert!(!ended.is_dragging);
//! assert_eq!((ended.dx, ended.dy), (5.0, 2.0));
//! ```

use kurbo::{Point, Vec2};

use crate::local_point::DragEvent;

/// Clamp `value` into `[lo, hi]` as `min(max(value, lo), hi)`.
///
/// Bounds are not validated; when `lo > hi` the result is `hi`.
#[inline]
#[must_use]
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Optional per-axis bounds for the dragged anchor.
///
/// An absent bound is unbounded on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restrict {
    /// Smallest allowed x.
    pub x_min: Option<f64>,
    /// Largest allowed x.
    pub x_max: Option<f64>,
    /// Smallest allowed y.
    pub y_min: Option<f64>,
    /// Largest allowed y.
    pub y_max: Option<f64>,
}

impl Restrict {
    /// No bounds on either axis.
    pub const NONE: Self = Self {
        x_min: None,
        x_max: None,
        y_min: None,
        y_max: None,
    };

    /// Clamp an x coordinate.
    #[must_use]
    pub fn clamp_x(&self, x: f64) -> f64 {
        clamp(
            x,
            self.x_min.unwrap_or(f64::NEG_INFINITY),
            self.x_max.unwrap_or(f64::INFINITY),
        )
    }

    /// Clamp a y coordinate.
    #[must_use]
    pub fn clamp_y(&self, y: f64) -> f64 {
        clamp(
            y,
            self.y_min.unwrap_or(f64::NEG_INFINITY),
            self.y_max.unwrap_or(f64::INFINITY),
        )
    }

    /// Clamp both axes independently.
    #[must_use]
    pub fn clamp_point(&self, p: Point) -> Point {
        Point::new(self.clamp_x(p.x), self.clamp_y(p.y))
    }
}

/// Values owned by the host that override the controller's own tracking.
///
/// Leave a field as `None` to let the controller manage it.
///
/// - The position fields (`x`, `y`, `dx`, `dy`) are applied together, and only when they
///   differ from the last controlled position the controller saw. A host that keeps
///   passing the same values does not interrupt a drag in progress.
/// - `is_dragging` is applied whenever it is `Some` and differs from the current state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlledPosition {
    /// Anchor x.
    pub x: Option<f64>,
    /// Anchor y.
    pub y: Option<f64>,
    /// Offset along x. Applied as `0` when the position is overridden without it.
    pub dx: Option<f64>,
    /// Offset along y. Applied as `0` when the position is overridden without it.
    pub dy: Option<f64>,
    /// Whether a drag is in progress.
    pub is_dragging: Option<bool>,
}

impl ControlledPosition {
    fn position(&self) -> [Option<f64>; 4] {
        [self.x, self.y, self.dx, self.dy]
    }
}

/// Configuration for a [`DragController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOptions {
    /// Zero the offset when a new drag starts.
    pub reset_on_start: bool,
    /// Move the anchor to the pointer when a drag starts.
    pub snap_to_pointer: bool,
    /// Bounds for the anchor.
    pub restrict: Restrict,
    /// Host-owned overrides.
    pub controlled: ControlledPosition,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            reset_on_start: false,
            snap_to_pointer: true,
            restrict: Restrict::NONE,
            controlled: ControlledPosition::default(),
        }
    }
}

/// Snapshot of a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState {
    /// Anchor x at drag start. `None` until a drag starts or a host sets it.
    pub x: Option<f64>,
    /// Anchor y at drag start. `None` until a drag starts or a host sets it.
    pub y: Option<f64>,
    /// Change in x since the anchor was set.
    pub dx: f64,
    /// Change in y since the anchor was set.
    pub dy: f64,
    /// Whether a drag is in progress.
    pub is_dragging: bool,
}

impl DragState {
    /// The anchor, treating unset coordinates as `0`.
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }

    /// The accumulated offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// Current position of the dragged element: anchor plus offset.
    #[must_use]
    pub fn position(&self) -> Point {
        self.anchor() + self.offset()
    }
}

/// Arguments passed to [`DragHandler`] callbacks.
#[derive(Debug)]
pub struct HandlerArgs<'a, E: ?Sized> {
    /// State after the transition.
    pub state: DragState,
    /// Event that triggered the transition.
    pub event: &'a E,
}

/// Receives drag notifications.
///
/// All methods default to doing nothing; `()` is a handler that ignores everything.
pub trait DragHandler<E: ?Sized> {
    /// A drag started.
    fn on_drag_start(&mut self, args: HandlerArgs<'_, E>) {
        let _ = args;
    }
    /// The pointer moved during a drag.
    fn on_drag_move(&mut self, args: HandlerArgs<'_, E>) {
        let _ = args;
    }
    /// A drag ended.
    fn on_drag_end(&mut self, args: HandlerArgs<'_, E>) {
        let _ = args;
    }
}

impl<E: ?Sized> DragHandler<E> for () {}

/// Drag state machine.
///
/// See the [module docs](self) for the model.
#[derive(Clone, Debug)]
pub struct DragController {
    options: DragOptions,
    state: DragState,
    /// Anchor minus pointer, captured on start.
    pointer_offset: Vec2,
    /// Last controlled position applied, to detect host changes.
    seen_position: [Option<f64>; 4],
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DragOptions::default())
    }
}

impl DragController {
    /// Create an idle controller, seeding its position from `options.controlled`.
    #[must_use]
    pub fn new(options: DragOptions) -> Self {
        let c = options.controlled;
        Self {
            options,
            state: DragState {
                x: c.x,
                y: c.y,
                dx: c.dx.unwrap_or(0.0),
                dy: c.dy.unwrap_or(0.0),
                is_dragging: false,
            },
            pointer_offset: Vec2::ZERO,
            seen_position: c.position(),
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    /// Replace the options and reconcile controlled values immediately.
    pub fn configure(&mut self, options: DragOptions) {
        self.options = options;
        self.reconcile();
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Offset from the pointer to the anchor captured at the last start.
    #[must_use]
    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer_offset
    }

    /// Apply host-controlled values on top of internal state.
    ///
    /// Runs automatically before every transition and after [`configure`](Self::configure).
    pub fn reconcile(&mut self) {
        let c = self.options.controlled;
        let position = c.position();
        if position != self.seen_position {
            self.seen_position = position;
            self.state.x = c.x;
            self.state.y = c.y;
            self.state.dx = c.dx.unwrap_or(0.0);
            self.state.dy = c.dy.unwrap_or(0.0);
            log::trace!("controlled position applied: {:?}", self.state);
        }
        if let Some(is_dragging) = c.is_dragging
            && is_dragging != self.state.is_dragging
        {
            self.state.is_dragging = is_dragging;
            log::trace!("controlled is_dragging applied: {is_dragging}");
        }
    }

    /// Handle a start event: set the anchor and begin dragging.
    pub fn start<E, H>(&mut self, event: &E, handler: &mut H) -> DragState
    where
        E: DragEvent + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        self.reconcile();
        let DragOptions {
            reset_on_start,
            snap_to_pointer,
            restrict,
            ..
        } = self.options;

        let current = self.state.position();
        let pointer = event.local_point().unwrap_or(Point::ORIGIN);
        let target = if snap_to_pointer { pointer } else { current };
        self.pointer_offset = current - pointer;

        let anchor = restrict.clamp_point(target);
        let (dx, dy) = if reset_on_start {
            (0.0, 0.0)
        } else {
            (self.state.dx, self.state.dy)
        };
        self.state = DragState {
            x: Some(anchor.x - dx),
            y: Some(anchor.y - dy),
            dx,
            dy,
            is_dragging: true,
        };
        log::debug!("drag start at {pointer:?}: {:?}", self.state);

        handler.on_drag_start(HandlerArgs {
            state: self.state,
            event,
        });
        self.state
    }

    /// Handle a move event.
    ///
    /// Returns `None`, without notifying `handler`, when no drag is in progress.
    pub fn update<E, H>(&mut self, event: &E, handler: &mut H) -> Option<DragState>
    where
        E: DragEvent + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        self.reconcile();
        if !self.state.is_dragging {
            return None;
        }

        let pointer = event.local_point().unwrap_or(Point::ORIGIN);
        let target = if self.options.snap_to_pointer {
            pointer
        } else {
            pointer + self.pointer_offset
        };
        let clamped = self.options.restrict.clamp_point(target);
        let anchor = self.state.anchor();
        self.state.dx = clamped.x - anchor.x;
        self.state.dy = clamped.y - anchor.y;
        log::trace!("drag move to {pointer:?}: offset {:?}", self.state.offset());

        if self.state.is_dragging {
            handler.on_drag_move(HandlerArgs {
                state: self.state,
                event,
            });
        }
        Some(self.state)
    }

    /// Handle an end event: stop dragging and keep the final offset.
    ///
    /// Returns `None`, without notifying `handler`, when no drag is in progress.
    pub fn end<E, H>(&mut self, event: &E, handler: &mut H) -> Option<DragState>
    where
        E: DragEvent + ?Sized,
        H: DragHandler<E> + ?Sized,
    {
        self.reconcile();
        if !self.state.is_dragging {
            return None;
        }

        self.state.is_dragging = false;
        log::debug!("drag end: {:?}", self.state);
        handler.on_drag_end(HandlerArgs {
            state: self.state,
            event,
        });
        Some(self.state)
    }
}
