use serde::Deserialize;
use std::fmt;

/// A grid cell ("CP") in the square domain centred on the origin.
/// X increases to the right, Y increases upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Square ("Chebyshev") distance: the larger of the two axis offsets.
    /// Unsigned, so opposite corners of the `i32` plane do not overflow.
    pub fn chebyshev_distance(&self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True when both axes lie within `[-boundary, boundary]`.
    pub fn is_within(&self, boundary: i32) -> bool {
        (-boundary..=boundary).contains(&self.x) && (-boundary..=boundary).contains(&self.y)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Coordinate {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
