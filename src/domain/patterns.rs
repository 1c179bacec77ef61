use thiserror::Error;

use super::State;

/// A named seed pattern: the living cells of generation zero
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Create a new pattern from living cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self {
            name,
            description,
            cells,
        }
    }

    /// The pattern's cells as a seed state
    pub fn to_state(&self) -> State {
        self.cells.iter().copied().collect()
    }
}

/// Requested pattern name is not in the preset table
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pattern: {0:?}")]
pub struct UnknownPattern(pub String);

/// Named seed patterns selectable from the command line
pub mod presets {
    use super::*;

    /// R-pentomino - classic methuselah
    pub fn rpentomino() -> Pattern {
        Pattern::new(
            "rpentomino",
            "Methuselah - chaotic growth from five cells",
            vec![(3, 2), (2, 3), (3, 3), (3, 4), (4, 4)],
        )
    }

    /// Glider next to a still-life block
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship (period 4) beside a block",
            vec![
                (-2, -2),
                (-1, -2),
                (-2, -1),
                (-1, -1),
                (1, 1),
                (2, 1),
                (3, 1),
                (3, 2),
                (2, 3),
            ],
        )
    }

    /// 2x2 block - simple still life
    pub fn square() -> Pattern {
        Pattern::new(
            "square",
            "Still life",
            vec![(1, 1), (2, 1), (1, 2), (2, 2)],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![rpentomino(), glider(), square()]
    }

    /// Look a pattern up by its exact name
    pub fn find(name: &str) -> Result<Pattern, UnknownPattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| UnknownPattern(name.to_owned()))
    }
}
