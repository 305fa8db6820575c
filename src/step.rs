use crate::{grid::Grid, neighbours::living_neighbours};

/// Classic birth/survival rule for one cell.
#[inline]
pub fn next_state(value: u8, neighbours: u8) -> u8 {
    match (value, neighbours) {
        // survival
        (1, 2) | (1, 3) => 1,
        // birth
        (0, 3) => 1,
        // under/overpopulation, or stays dead
        _ => 0,
    }
}

/// Computes the generation after `current` as a brand-new grid.
pub fn next_generation(current: &Grid) -> Grid {
    let mut next = Grid::empty(current.size());
    next_generation_into(current, &mut next);
    next
}

/// Writes the generation after `current` into `next`, overwriting every cell.
///
/// Every cell is decided from `current` alone, so the order in which cells are
/// visited does not matter.
pub fn next_generation_into(current: &Grid, next: &mut Grid) {
    assert_eq!(
        current.size(),
        next.size(),
        "back buffer must match the board size"
    );
    next.fill_from(
        current
            .coords()
            .map(|(x, y)| next_state(current.get(x, y), living_neighbours(current, x, y))),
    );
}
