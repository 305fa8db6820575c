//! Moore neighbourhood counting on a board with clamped edges.
//!
//! Cells beyond the board do not exist, so edge cells have 5 neighbours and
//! corner cells 3. There is no wraparound.

use crate::grid::Grid;

type Offset = (isize, isize);

// (dx, dy) with y growing downwards
const N: Offset = (0, -1);
const NE: Offset = (1, -1);
const E: Offset = (1, 0);
const SE: Offset = (1, 1);
const S: Offset = (0, 1);
const SW: Offset = (-1, 1);
const W: Offset = (-1, 0);
const NW: Offset = (-1, -1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Where a cell sits on the board, which decides its in-bounds neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Interior,
    Edge(Side),
    Corner(Corner),
}

impl Position {
    /// Panics if `(x, y)` is not on a `size`x`size` board.
    pub fn classify(x: usize, y: usize, size: usize) -> Self {
        assert!(
            x < size && y < size,
            "cell ({x}, {y}) is outside the {size}x{size} grid"
        );
        let last = size - 1;
        // a board is at least 2x2, so top/bottom and left/right never coincide
        match (y == 0, y == last, x == 0, x == last) {
            (true, _, true, _) => Position::Corner(Corner::TopLeft),
            (true, _, _, true) => Position::Corner(Corner::TopRight),
            (_, true, true, _) => Position::Corner(Corner::BottomLeft),
            (_, true, _, true) => Position::Corner(Corner::BottomRight),
            (true, _, _, _) => Position::Edge(Side::Top),
            (_, true, _, _) => Position::Edge(Side::Bottom),
            (_, _, true, _) => Position::Edge(Side::Left),
            (_, _, _, true) => Position::Edge(Side::Right),
            _ => Position::Interior,
        }
    }

    /// offsets of the neighbours that stay on the board
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            Position::Interior => &[N, NE, E, SE, S, SW, W, NW],
            Position::Edge(Side::Top) => &[E, SE, S, SW, W],
            Position::Edge(Side::Bottom) => &[N, NE, E, W, NW],
            Position::Edge(Side::Left) => &[N, NE, E, SE, S],
            Position::Edge(Side::Right) => &[N, S, SW, W, NW],
            Position::Corner(Corner::TopLeft) => &[E, SE, S],
            Position::Corner(Corner::TopRight) => &[S, SW, W],
            Position::Corner(Corner::BottomLeft) => &[N, NE, E],
            Position::Corner(Corner::BottomRight) => &[N, W, NW],
        }
    }
}

/// number of living cells around `(x, y)`; the cell itself is never counted
pub fn living_neighbours(grid: &Grid, x: usize, y: usize) -> u8 {
    Position::classify(x, y, grid.size())
        .offsets()
        .iter()
        .map(|&(dx, dy)| grid.get(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy)))
        .sum()
}
