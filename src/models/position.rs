use std::fmt;

/// A cell coordinate on the space map. 0-based, (0,0) is upper-left.
/// X increases left-to-right, Y increases top-to-bottom, and (x, y) is stored at grid[y][x].
/// Signed so that a step off the edge is representable before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The position one step away by (dx, dy). No bounds check.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
