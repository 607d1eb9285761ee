// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolve raw input into a point in the target's local coordinate space.
//!
//! Hosts deliver pointer data in client (window) space. Drag math wants the
//! position relative to the element being dragged, so this module:
//!
//! 1) Normalizes the input shape ([`PointerInput`]) into a single client-space point.
//!    Mouse and pointer events carry their position directly, touch events use the
//!    first changed touch, and non-positional triggers such as focus use the center
//!    of the target's bounding box.
//! 2) Maps that point into the target's frame ([`TargetFrame`]). When the frame
//!    carries a screen transform (for example scaled or rotated vector content) the
//!    point is run through its inverse; otherwise the bounding-box origin and border
//!    insets are subtracted.
//!
//! Missing data never fails: an empty touch list or a focus event without bounds
//! resolves to the origin.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_drag::local_point::{PointerInput, TargetFrame, local_point};
//!
//! let target = TargetFrame::from_bounds(Rect::new(100.0, 50.0, 200.0, 150.0));
//! let input = PointerInput::Mouse { client: Point::new(110.0, 70.0) };
//!
//! assert_eq!(local_point(&input, Some(&target)), Some(Point::new(10.0, 20.0)));
//! assert_eq!(local_point(&input, None), None);
//! ```

use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Vec2};

/// Raw pointer data from a host event, in client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// Mouse or pointer event.
    Mouse {
        /// Pointer position in client space.
        client: Point,
    },
    /// Touch event.
    Touch {
        /// Client-space positions of the touches that changed with this event.
        changed_touches: Vec<Point>,
    },
    /// Non-positional trigger, such as keyboard focus landing on the target.
    Focus {
        /// Client-space bounding box of the event target, if the host knows it.
        target_bounds: Option<Rect>,
    },
}

impl PointerInput {
    /// Client-space point carried by this input.
    ///
    /// Falls back to [`Point::ORIGIN`] when no usable position is present.
    #[must_use]
    pub fn client_point(&self) -> Point {
        match self {
            Self::Mouse { client } => *client,
            Self::Touch { changed_touches } => {
                changed_touches.first().copied().unwrap_or(Point::ORIGIN)
            }
            Self::Focus { target_bounds } => target_bounds.map_or(Point::ORIGIN, |r| r.center()),
        }
    }
}

/// Coordinate frame of the element an event is targeted at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetFrame {
    /// Bounding box of the element in client space.
    pub bounds: Rect,
    /// Width of the element's left and top borders.
    ///
    /// Local coordinates start inside the border, so this is subtracted along
    /// with the bounding-box origin.
    pub client_origin: Vec2,
    /// Transform from the element's own coordinate space to client space.
    ///
    /// Set this for content with a non-trivial frame such as scaled or rotated
    /// vector graphics. Takes precedence over `bounds` when invertible.
    pub screen_ctm: Option<Affine>,
}

impl TargetFrame {
    /// A plain box target with no border and no transform.
    #[must_use]
    pub fn from_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            client_origin: Vec2::ZERO,
            screen_ctm: None,
        }
    }

    /// A transformed target whose local space maps to client space through `ctm`.
    #[must_use]
    pub fn with_transform(bounds: Rect, ctm: Affine) -> Self {
        Self {
            bounds,
            client_origin: Vec2::ZERO,
            screen_ctm: Some(ctm),
        }
    }

    /// Map a client-space point into this frame's local space.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        if let Some(ctm) = self.screen_ctm {
            let det = ctm.determinant();
            if det != 0.0 && det.is_finite() {
                return ctm.inverse() * client;
            }
            log::trace!("singular target transform, using bounding box");
        }
        client - self.bounds.origin().to_vec2() - self.client_origin
    }
}

/// Resolve `input` into `target`'s local space.
///
/// Returns `None` when there is no target to resolve against.
#[must_use]
pub fn local_point(input: &PointerInput, target: Option<&TargetFrame>) -> Option<Point> {
    target.map(|frame| frame.to_local(input.client_point()))
}

/// An event that can report its position in the dragged element's local space.
///
/// [`DragController`](crate::DragController) accepts any type implementing this
/// trait. `None` is treated as the origin.
pub trait DragEvent {
    /// Position of this event in local coordinates, if resolvable.
    fn local_point(&self) -> Option<Point>;
}

/// A host event captured as raw input plus the frame of its target.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Raw pointer data.
    pub input: PointerInput,
    /// Frame of the event target, if any.
    pub target: Option<TargetFrame>,
}

impl PointerSample {
    /// Mouse event at `client` over `target`.
    #[must_use]
    pub fn mouse(client: Point, target: TargetFrame) -> Self {
        Self {
            input: PointerInput::Mouse { client },
            target: Some(target),
        }
    }

    /// Touch event with the given changed touches over `target`.
    #[must_use]
    pub fn touch(changed_touches: Vec<Point>, target: TargetFrame) -> Self {
        Self {
            input: PointerInput::Touch { changed_touches },
            target: Some(target),
        }
    }

    /// Focus event on `target`, positioned at the center of its bounds.
    #[must_use]
    pub fn focus(target: TargetFrame) -> Self {
        Self {
            input: PointerInput::Focus {
                target_bounds: Some(target.bounds),
            },
            target: Some(target),
        }
    }
}

impl DragEvent for PointerSample {
    fn local_point(&self) -> Option<Point> {
        local_point(&self.input, self.target.as_ref())
    }
}

impl DragEvent for Point {
    fn local_point(&self) -> Option<Point> {
        Some(*self)
    }
}

impl<E: DragEvent + ?Sized> DragEvent for &E {
    fn local_point(&self) -> Option<Point> {
        (**self).local_point()
    }
}
