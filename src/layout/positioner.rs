//! Tip placement and viewport clamping
//!
//! The positioner starts at the target's top-left corner, moves the point
//! according to the requested [`Placement`], then clamps one axis so the tip
//! stays on screen. The returned [`AnchorTransform`] tells the renderer which
//! part of the tip sits on the computed point (a self-relative translate).
//!
//! | Placement | clamped axis | anchor |
//! |-----------|--------------|--------|
//! | top       | x            | bottom center |
//! | right     | y            | left middle |
//! | left      | y            | right middle |
//! | topleft   | y            | bottom right |
//! | bottom    | x            | top center, pushed down by 25% |

use serde::{Serialize, Serializer};
use std::fmt;

use super::constants::{LEFT_PADDING_PX, RIGHT_PADDING_PX, TOP_PADDING_PX};
use crate::models::{Placement, Point, Rect, Size, ViewportSize};

/// Self-relative offset applied to the tip after absolute positioning
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorTransform {
    /// `translate(-50%,-100%)`
    BottomCenter,
    /// `translateY(-50%)`
    LeftMiddle,
    /// `translate(-100%,-50%)`
    RightMiddle,
    /// `translate(-100%,-100%)`
    BottomRight,
    /// `translate(-50%,25%)`
    TopCenterBelow,
}

impl AnchorTransform {
    /// CSS `transform` value for this anchor
    pub const fn as_css(self) -> &'static str {
        match self {
            AnchorTransform::BottomCenter => "translate(-50%,-100%)",
            AnchorTransform::LeftMiddle => "translateY(-50%)",
            AnchorTransform::RightMiddle => "translate(-100%,-50%)",
            AnchorTransform::BottomRight => "translate(-100%,-100%)",
            AnchorTransform::TopCenterBelow => "translate(-50%,25%)",
        }
    }
}

impl fmt::Display for AnchorTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

// JS only ever needs the CSS string
impl Serialize for AnchorTransform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_css())
    }
}

/// Absolute tip coordinates plus the anchor to apply at that point
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub transform: AnchorTransform,
}

/// Inclusive range a coordinate is clamped into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl ClampRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Raise to `min`, else lower to `max`, else pass through.
    ///
    /// Unlike `f64::clamp` this never panics: an inverted range resolves to
    /// `min` for values below it, and NaN passes through untouched.
    pub fn apply(self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Snapshot of everything a placement rule reads
#[derive(Clone, Copy, Debug)]
struct Frame {
    target: Rect,
    container: Size,
    viewport: ViewportSize,
}

type OffsetFn = fn(&Frame) -> f64;
type RangeFn = fn(&Frame) -> ClampRange;

/// Per-placement offsets, clamp ranges and anchor
struct PlacementRule {
    dx: OffsetFn,
    dy: OffsetFn,
    clamp_x: Option<RangeFn>,
    clamp_y: Option<RangeFn>,
    transform: AnchorTransform,
}

fn no_offset(_: &Frame) -> f64 {
    0.0
}

fn half_target_width(f: &Frame) -> f64 {
    f.target.width / 2.0
}

fn half_target_height(f: &Frame) -> f64 {
    f.target.height / 2.0
}

fn full_target_height(f: &Frame) -> f64 {
    f.target.height
}

fn above_target(_: &Frame) -> f64 {
    -TOP_PADDING_PX
}

fn left_of_target(_: &Frame) -> f64 {
    -LEFT_PADDING_PX
}

fn right_of_target(f: &Frame) -> f64 {
    (f.target.width + RIGHT_PADDING_PX).min(f.viewport.width - f.container.width / 2.0)
}

fn horizontal_range(f: &Frame) -> ClampRange {
    ClampRange::new(
        f.container.width / 2.0,
        f.viewport.width - f.container.width,
    )
}

fn vertical_range(f: &Frame) -> ClampRange {
    ClampRange::new(0.0, f.viewport.height - f.container.height / 2.0)
}

const TOP: PlacementRule = PlacementRule {
    dx: half_target_width,
    dy: above_target,
    clamp_x: Some(horizontal_range),
    clamp_y: None,
    transform: AnchorTransform::BottomCenter,
};

const RIGHT: PlacementRule = PlacementRule {
    dx: right_of_target,
    dy: half_target_height,
    clamp_x: None,
    clamp_y: Some(vertical_range),
    transform: AnchorTransform::LeftMiddle,
};

const LEFT: PlacementRule = PlacementRule {
    dx: left_of_target,
    dy: half_target_height,
    clamp_x: None,
    clamp_y: Some(vertical_range),
    transform: AnchorTransform::RightMiddle,
};

// No horizontal gap here, unlike the 25px gap of LEFT
const TOP_LEFT: PlacementRule = PlacementRule {
    dx: no_offset,
    dy: above_target,
    clamp_x: None,
    clamp_y: Some(vertical_range),
    transform: AnchorTransform::BottomRight,
};

const BOTTOM: PlacementRule = PlacementRule {
    dx: half_target_width,
    dy: full_target_height,
    clamp_x: Some(horizontal_range),
    clamp_y: None,
    transform: AnchorTransform::TopCenterBelow,
};

fn rule_for(placement: Placement) -> &'static PlacementRule {
    match placement {
        Placement::Top => &TOP,
        Placement::Right => &RIGHT,
        Placement::Left => &LEFT,
        Placement::TopLeft => &TOP_LEFT,
        // Unrecognized names already parse to Bottom
        Placement::Bottom => &BOTTOM,
    }
}

/// Clamp range the positioner applies for `placement`, per axis
///
/// Returns `(x_range, y_range)`; exactly one of them is `Some`.
pub fn clamp_ranges(
    target: Rect,
    container: Size,
    viewport: ViewportSize,
    placement: Placement,
) -> (Option<ClampRange>, Option<ClampRange>) {
    let frame = Frame {
        target,
        container,
        viewport,
    };
    let rule = rule_for(placement);
    (
        rule.clamp_x.map(|range| range(&frame)),
        rule.clamp_y.map(|range| range(&frame)),
    )
}

/// Compute where a tip of size `container` goes for `target`
///
/// Total over all numeric inputs; degenerate geometry yields degenerate but
/// well-defined coordinates.
pub fn compute_position(
    target: Rect,
    container: Size,
    viewport: ViewportSize,
    placement: Placement,
) -> Position {
    let frame = Frame {
        target,
        container,
        viewport,
    };
    let rule = rule_for(placement);

    let mut pos = Point::new(target.x + (rule.dx)(&frame), target.y + (rule.dy)(&frame));
    if let Some(range) = rule.clamp_x {
        pos.x = range(&frame).apply(pos.x);
    }
    if let Some(range) = rule.clamp_y {
        pos.y = range(&frame).apply(pos.y);
    }

    log::trace!(
        "compute_position: placement={} target=({:.1},{:.1},{:.1},{:.1}) container=({:.1},{:.1}) viewport=({:.1},{:.1}) -> ({:.1},{:.1})",
        placement,
        target.x,
        target.y,
        target.width,
        target.height,
        container.width,
        container.height,
        viewport.width,
        viewport.height,
        pos.x,
        pos.y
    );

    Position {
        x: pos.x,
        y: pos.y,
        transform: rule.transform,
    }
}
