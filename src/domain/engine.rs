//! Generation transition for Conway's Game of Life (B3/S23).
//!
//! A cell can only gain life if it borders a living cell, so scanning
//! one ring beyond the tightest bounding box of the current population
//! is both sufficient and necessary. Everything here is a pure function
//! from an input state to a freshly allocated output state.

use tracing::debug;

use super::{Bounds, Cell, State};

/// Will `cell` be living in the next generation?
///
/// Birth or survival at exactly 3 living neighbors; survival only,
/// never birth, at exactly 2.
pub fn will_be_alive(cell: Cell, state: &State) -> bool {
    match state.living_neighbors(cell) {
        3 => true,
        2 => state.contains(cell),
        _ => false,
    }
}

/// Compute the next generation from `state`.
///
/// Scans every cell of the bounding box expanded by one in each
/// direction and keeps those that pass [`will_be_alive`]. The result
/// depends only on the input's contents, not on scan order. An empty
/// state stays empty.
pub fn next_generation(state: &State) -> State {
    let scan = Bounds::of(state).expand(1);
    scan.y_range()
        .flat_map(|y| scan.x_range().map(move |x| Cell::new(x, y)))
        .filter(|cell| will_be_alive(*cell, state))
        .collect()
}

/// Run the simulation for `generations` steps, materializing every
/// intermediate state. Returns `generations + 1` states, the seed
/// first; `generations == 0` yields just the seed.
pub fn iterate(seed: State, generations: usize) -> Vec<State> {
    let mut history = Vec::with_capacity(generations + 1);
    history.push(seed);
    for step in 1..=generations {
        let next = next_generation(&history[step - 1]);
        debug!(step, population = next.population(), "computed generation");
        history.push(next);
    }
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(cells: &[(i64, i64)]) -> State {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_lone_cell_dies() {
        assert!(!will_be_alive(Cell::new(0, 0), &state(&[(0, 0)])));
    }

    #[test]
    fn test_two_neighbors_sustain_but_never_birth() {
        let block_corner = state(&[(1, 1), (2, 1), (1, 2)]);
        // (1, 1) is alive with two living neighbors: survives
        assert!(will_be_alive(Cell::new(1, 1), &block_corner));
        // (0, 2) is dead with two living neighbors: stays dead
        assert!(!will_be_alive(Cell::new(0, 2), &block_corner));
        // (2, 2) is dead with three living neighbors: born
        assert!(will_be_alive(Cell::new(2, 2), &block_corner));
    }

    #[test]
    fn test_overpopulation_kills() {
        let crowded = state(&[(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)]);
        assert!(!will_be_alive(Cell::new(0, 0), &crowded));
    }

    #[test]
    fn test_empty_state_stays_empty() {
        assert!(next_generation(&State::new()).is_empty());
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = state(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(next_generation(&block), block);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = state(&[(-1, 0), (0, 0), (1, 0)]);
        let vertical = state(&[(0, -1), (0, 0), (0, 1)]);
        assert_eq!(next_generation(&horizontal), vertical);
        assert_eq!(next_generation(&vertical), horizontal);
    }

    #[test]
    fn test_glider_translates_each_period() {
        // Four generations move this glider one cell right and one
        // cell down (toward negative y)
        let glider = state(&[(1, 1), (2, 1), (3, 1), (3, 2), (2, 3)]);
        let mut current = glider.clone();
        for _ in 0..4 {
            current = next_generation(&current);
        }
        let translated: State = glider.iter().map(|c| c.offset(1, -1)).collect();
        assert_eq!(current, translated);
    }

    #[test]
    fn test_named_glider_seed_keeps_its_block() {
        // The glider preset pairs a spaceship with a 2x2 block far
        // enough away that the two never interact in four steps
        let seed = crate::domain::presets::glider().to_state();
        let after_period = iterate(seed, 4).pop().unwrap();

        let block = [(-2, -2), (-1, -2), (-2, -1), (-1, -1)];
        for (x, y) in block {
            assert!(after_period.contains(Cell::new(x, y)));
        }
        let moved_glider = [(2, 0), (3, 0), (4, 0), (4, 1), (3, 2)];
        for (x, y) in moved_glider {
            assert!(after_period.contains(Cell::new(x, y)));
        }
        assert_eq!(after_period.population(), 9);
    }

    #[test]
    fn test_iterate_returns_generations_plus_one_states() {
        let seed = state(&[(0, 0)]);
        let history = iterate(seed.clone(), 3);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0], seed);
        // A lone cell goes extinct immediately and stays extinct
        assert!(history[1].is_empty());
        assert!(history[3].is_empty());
    }

    #[test]
    fn test_iterate_zero_yields_only_the_seed() {
        let seed = state(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(iterate(seed.clone(), 0), vec![seed]);
    }
}
