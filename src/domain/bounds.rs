use std::ops::RangeInclusive;

use super::{Cell, State};

/// Bounds is the minimal axis-aligned rectangle enclosing a state's
/// living cells. Each axis extremum is computed independently, so the
/// corners need not themselves be living cells.
///
/// The empty state degenerates to a 1x1 box at the origin; callers
/// treat that as a defined region, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
    pub bottom_left: Cell,
    pub top_right: Cell,
}

impl Bounds {
    /// Compute the bounding box of a state
    pub fn of(state: &State) -> Self {
        if state.is_empty() {
            return Self {
                bottom_left: Cell::new(0, 0),
                top_right: Cell::new(0, 0),
            };
        }

        // Fold seed is overwritten by the first cell
        let seed = Self {
            bottom_left: Cell::new(i64::MAX, i64::MAX),
            top_right: Cell::new(i64::MIN, i64::MIN),
        };
        state.iter().fold(seed, |bounds, cell| Self {
            bottom_left: Cell::new(
                bounds.bottom_left.x.min(cell.x),
                bounds.bottom_left.y.min(cell.y),
            ),
            top_right: Cell::new(
                bounds.top_right.x.max(cell.x),
                bounds.top_right.y.max(cell.y),
            ),
        })
    }

    /// Grow the box by `margin` cells in every direction
    pub const fn expand(self, margin: i64) -> Self {
        Self {
            bottom_left: self.bottom_left.offset(-margin, -margin),
            top_right: self.top_right.offset(margin, margin),
        }
    }

    /// Inclusive x span, left to right
    pub const fn x_range(&self) -> RangeInclusive<i64> {
        self.bottom_left.x..=self.top_right.x
    }

    /// Inclusive y span, bottom to top
    pub const fn y_range(&self) -> RangeInclusive<i64> {
        self.bottom_left.y..=self.top_right.y
    }
}
