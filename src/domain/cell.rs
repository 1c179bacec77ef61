/// Cell is a coordinate on the unbounded plane.
/// A cell is "living" when its coordinate is present in a [`super::State`];
/// the cell itself carries no alive/dead flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    /// Create a cell at the given coordinate
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The eight cells of the Moore neighborhood (orthogonal and
    /// diagonal), never including the cell itself.
    pub const fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }

    /// Translate by an offset (used when placing patterns)
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
