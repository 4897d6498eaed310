//! Edge anchoring and per-edge geometry
//!
//! Everything else in this crate is edge-agnostic: it reasons purely in
//! terms of "size along the sizing axis" and "projected touch position".
//! This module concentrates the axis and sign differences between the four
//! anchor edges so the gesture and state logic exists exactly once instead
//! of four diverging copies.

use glam::Vec2;

/// Minimum pointer velocity along the sizing axis for a gesture to count
/// as a fling, in logical pixels per second.
pub const FLING_MIN_VELOCITY: f32 = 200.0;

/// Minimum pointer travel along the sizing axis for a gesture to count as
/// a fling, in logical pixels. Filters out releases that are fast but
/// barely moved.
pub const FLING_MIN_DISTANCE: f32 = 20.0;

/// Space reserved on the side facing into the screen when a visible
/// offset wants room for a drop shadow, in logical pixels.
pub const SHADOW_MARGIN: f32 = 6.0;

/// The layout dimension a drawer resizes along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The drawer controls a width.
    Horizontal,
    /// The drawer controls a height.
    Vertical,
}

/// Per-side spacing in logical pixels.
///
/// Returned by [`Edge::content_padding`] and [`Edge::shadow_margin`] for
/// the host to apply to its own layout however it sees fit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    /// No spacing on any side.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Spacing on a single side, zero everywhere else.
    pub fn only(side: Edge, amount: f32) -> Self {
        let mut insets = Self::ZERO;
        match side {
            Edge::Top => insets.top = amount,
            Edge::Bottom => insets.bottom = amount,
            Edge::Left => insets.left = amount,
            Edge::Right => insets.right = amount,
        }
        insets
    }
}

/// The screen edge a drawer sheet is anchored to.
///
/// The edge is the alignment strategy: every edge-specific rule (which
/// axis is the sizing axis, how a raw pointer position projects onto it,
/// which fling direction means open or close, which side gets padding or
/// shadow room) is dispatched by matching on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Default for Edge {
    fn default() -> Self {
        Self::Bottom
    }
}

impl Edge {
    /// The layout dimension this edge's drawer expands and contracts
    /// along: height for top/bottom drawers, width for left/right ones.
    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Left | Edge::Right => Axis::Horizontal,
        }
    }

    /// The side facing into the screen, opposite the anchor.
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// The sizing-axis component of a container size.
    pub fn extent_of(self, bounds: Vec2) -> f32 {
        match self.axis() {
            Axis::Vertical => bounds.y,
            Axis::Horizontal => bounds.x,
        }
    }

    /// Projects a raw pointer position onto the sizing axis, measured
    /// from the anchored edge.
    ///
    /// A pointer resting exactly on the anchor projects to 0; a pointer
    /// on the far side of the container projects to the full container
    /// extent.
    pub fn project_touch(self, position: Vec2, bounds: Vec2) -> f32 {
        match self {
            Edge::Top => position.y,
            Edge::Bottom => bounds.y - position.y,
            Edge::Left => position.x,
            Edge::Right => bounds.x - position.x,
        }
    }

    /// Whether a gesture from `start` to `end` at `velocity` is a fling
    /// toward this edge, i.e. toward the closed state.
    ///
    /// Requires both the velocity and the travel along the sizing axis to
    /// clear [`FLING_MIN_VELOCITY`] and [`FLING_MIN_DISTANCE`], with the
    /// direction pointing at the anchor.
    pub fn is_fling_to_close(self, start: Vec2, end: Vec2, velocity: Vec2) -> bool {
        match self {
            Edge::Top => {
                velocity.y < -FLING_MIN_VELOCITY && start.y - end.y > FLING_MIN_DISTANCE
            }
            Edge::Bottom => {
                velocity.y > FLING_MIN_VELOCITY && end.y - start.y > FLING_MIN_DISTANCE
            }
            Edge::Left => {
                velocity.x < -FLING_MIN_VELOCITY && start.x - end.x > FLING_MIN_DISTANCE
            }
            Edge::Right => {
                velocity.x > FLING_MIN_VELOCITY && end.x - start.x > FLING_MIN_DISTANCE
            }
        }
    }

    /// Whether a gesture from `start` to `end` at `velocity` is a fling
    /// away from this edge, i.e. toward the open state.
    ///
    /// The direction sign spaces of the open and close predicates are
    /// disjoint, so at most one of them holds for any gesture.
    pub fn is_fling_to_open(self, start: Vec2, end: Vec2, velocity: Vec2) -> bool {
        match self {
            Edge::Top => {
                velocity.y > FLING_MIN_VELOCITY && end.y - start.y > FLING_MIN_DISTANCE
            }
            Edge::Bottom => {
                velocity.y < -FLING_MIN_VELOCITY && start.y - end.y > FLING_MIN_DISTANCE
            }
            Edge::Left => {
                velocity.x > FLING_MIN_VELOCITY && end.x - start.x > FLING_MIN_DISTANCE
            }
            Edge::Right => {
                velocity.x < -FLING_MIN_VELOCITY && start.x - end.x > FLING_MIN_DISTANCE
            }
        }
    }

    /// Padding that hides a closed drawer's offset: `amount` on the side
    /// facing into the screen, nothing elsewhere.
    pub fn content_padding(self, amount: f32) -> EdgeInsets {
        EdgeInsets::only(self.opposite(), amount)
    }

    /// Drop-shadow allowance for a visible offset: [`SHADOW_MARGIN`] on
    /// the side facing into the screen.
    pub fn shadow_margin(self) -> EdgeInsets {
        EdgeInsets::only(self.opposite(), SHADOW_MARGIN)
    }
}
