//! Viewport-aware popup placement.
//!
//! The popup opens to the right of and below its trigger when it fits there,
//! or when that side has at least as much room as the opposite one. It is then
//! pushed `offset` cells away from the trigger and clamped so that `margin`
//! cells stay free on every viewport edge.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Position, Size};

/// Tunables for the placement engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlacementConfig {
    /// Gap between the trigger edge and the popup, in cells
    #[serde(default = "default_offset")]
    pub offset: i32,

    /// Minimum distance between the popup and every viewport edge, in cells
    #[serde(default = "default_margin")]
    pub margin: i32,
}

fn default_offset() -> i32 {
    5
}

fn default_margin() -> i32 {
    10
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            offset: default_offset(),
            margin: default_margin(),
        }
    }
}

impl PlacementConfig {
    /// Offset and margin scaled down for a character-cell viewport
    pub fn cells() -> Self {
        Self {
            offset: 1,
            margin: 1,
        }
    }
}

/// Which side of the trigger the popup opens on, horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Right,
    Left,
}

/// Which side of the trigger the popup opens on, vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Below,
    Above,
}

/// Result of a placement computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    /// Measured popup size the position was computed for
    pub size: Size,
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Placement {
    /// Screen bounds the popup occupies
    pub fn bounds(&self) -> Bounds {
        Bounds::at(self.position, self.size)
    }
}

/// Choose a horizontal side. Right wins when the popup fits there or when the
/// right has at least as much room as the left.
pub fn choose_horizontal(trigger: &Bounds, popup_width: i32, viewport_width: i32) -> Horizontal {
    let space_right = viewport_width - trigger.right;
    let space_left = trigger.left;
    if space_right >= popup_width || space_right >= space_left {
        Horizontal::Right
    } else {
        Horizontal::Left
    }
}

/// Choose a vertical side. Below wins on ties.
pub fn choose_vertical(trigger: &Bounds, popup_height: i32, viewport_height: i32) -> Vertical {
    let space_below = viewport_height - trigger.bottom;
    let space_above = trigger.top;
    if space_below >= popup_height || space_below >= space_above {
        Vertical::Below
    } else {
        Vertical::Above
    }
}

/// Clamp `value` into `[margin, limit - extent - margin]`.
///
/// The lower bound is applied last, so when the popup does not fit at all the
/// result is `margin`.
fn clamp_axis(value: i32, extent: i32, limit: i32, margin: i32) -> i32 {
    value.min(limit - extent - margin).max(margin)
}

/// Compute the full placement for a popup of `popup` size anchored to `trigger`
pub fn compute_placement(
    trigger: &Bounds,
    popup: Size,
    viewport: Size,
    config: &PlacementConfig,
) -> Placement {
    let horizontal = choose_horizontal(trigger, popup.width, viewport.width);
    let vertical = choose_vertical(trigger, popup.height, viewport.height);

    let left = match horizontal {
        Horizontal::Right => trigger.right + config.offset,
        Horizontal::Left => trigger.left - popup.width - config.offset,
    };
    let top = match vertical {
        Vertical::Below => trigger.bottom + config.offset,
        Vertical::Above => trigger.top - popup.height - config.offset,
    };

    let position = Position {
        top: clamp_axis(top, popup.height, viewport.height, config.margin),
        left: clamp_axis(left, popup.width, viewport.width, config.margin),
    };

    tracing::trace!(
        ?horizontal,
        ?vertical,
        preferred_top = top,
        preferred_left = left,
        top = position.top,
        left = position.left,
        "computed popup placement"
    );

    Placement {
        position,
        size: popup,
        horizontal,
        vertical,
    }
}

/// Compute the `{top, left}` offsets for a popup anchored to `trigger`
pub fn compute_position(
    trigger: &Bounds,
    popup: Size,
    viewport: Size,
    config: &PlacementConfig,
) -> Position {
    compute_placement(trigger, popup, viewport, config).position
}
