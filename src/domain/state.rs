use std::collections::HashSet;

use super::Cell;

/// State is the set of all living cells at one generation.
/// Sparse by construction: dead cells are simply absent, so the plane
/// is unbounded without costing memory. Backed by a hash set, so
/// membership is O(1) and duplicate insertions collapse to one cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    cells: HashSet<Cell>,
}

impl State {
    /// Create an empty state (no living cells)
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test: is `cell` living in this generation?
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Mark a cell as living. Re-inserting a living cell is a no-op.
    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    /// Number of living cells
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is living (extinction)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the living cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Count how many of `cell`'s eight neighbors are living
    pub fn living_neighbors(&self, cell: Cell) -> usize {
        cell.neighbors()
            .into_iter()
            .filter(|n| self.contains(*n))
            .count()
    }
}

impl FromIterator<Cell> for State {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(i64, i64)> for State {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}
