//! Viewport geometry shared by the placement engine and the hosts.
//!
//! All values are in viewport cells with the origin at the top-left corner.
//! Coordinates are signed because a preferred placement may start before the
//! viewport origin until it is clamped.

use serde::{Deserialize, Serialize};

/// Width and height of a viewport or a measured popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Bounding box of a measured element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Create bounds from the top-left corner and a size
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create bounds from edges; width and height are derived
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Bounds of a popup of `size` placed at `position`
    pub fn at(position: Position, size: Size) -> Self {
        Self::new(position.left, position.top, size.width, size.height)
    }

    /// Check if a cell lies inside (right and bottom edges are exclusive)
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Top-left offset of a popup in the viewport's fixed coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: i32,
    pub left: i32,
}

impl Position {
    pub fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }

    /// Offsets as `(top, left)` pixel strings, e.g. `("55px", "1045px")`
    pub fn css_offsets(&self) -> (String, String) {
        (format!("{}px", self.top), format!("{}px", self.left))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "top: {}px; left: {}px", self.top, self.left)
    }
}

#[cfg(feature = "runtime")]
mod ratatui_interop {
    use super::Bounds;
    use ratatui::layout::Rect;

    impl From<Rect> for Bounds {
        fn from(rect: Rect) -> Self {
            Bounds::new(
                i32::from(rect.x),
                i32::from(rect.y),
                i32::from(rect.width),
                i32::from(rect.height),
            )
        }
    }
}
