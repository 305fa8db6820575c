/// A square board of cells, each either dead (`0`) or alive (`1`).
///
/// Cells are stored row-major in one flat buffer. The board never changes its
/// size and has no per-cell setter: a new generation replaces the whole buffer
/// at once through [`Grid::swap_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// the amount of cells on each axis
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// an all-dead board
    pub fn empty(size: usize) -> Self {
        assert!(size >= 2, "grid must be at least 2x2, got {size}x{size}");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// a board where every cell is an independent fair coin flip
    pub fn random(size: usize, rng: &mut fastrand::Rng) -> Self {
        assert!(size >= 2, "grid must be at least 2x2, got {size}x{size}");
        let cells = (0..size * size).map(|_| u8::from(rng.bool())).collect();
        Self { size, cells }
    }

    /// builds a board from row-major cell values, anything non-zero is alive
    pub fn from_cells(size: usize, cells: impl IntoIterator<Item = u8>) -> Self {
        assert!(size >= 2, "grid must be at least 2x2, got {size}x{size}");
        let cells: Vec<u8> = cells.into_iter().map(|v| u8::from(v != 0)).collect();
        assert_eq!(
            size * size,
            cells.len(),
            "cell buffer does not match a {size}x{size} grid"
        );
        Self { size, cells }
    }

    /// builds a board with exactly the listed `(x, y)` cells alive
    pub fn with_alive(size: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::empty(size);
        for &(x, y) in alive {
            let idx = grid.idx(x, y);
            grid.cells[idx] = 1;
        }
        grid
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// value of the cell at column `x`, row `y`
    ///
    /// Panics if the coordinate lies outside the board.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == 1
    }

    /// number of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// every coordinate of the board, row by row
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    /// installs `next` as the whole board, leaving the previous board in `next`
    pub fn swap_with(&mut self, next: &mut Grid) {
        assert_eq!(
            self.size, next.size,
            "replacement grid must keep the board size"
        );
        std::mem::swap(self, next);
    }

    /// overwrites every cell from `values`, visited in [`Grid::coords`] order
    pub(crate) fn fill_from(&mut self, values: impl Iterator<Item = u8>) {
        let mut written = 0;
        for (cell, value) in self.cells.iter_mut().zip(values) {
            *cell = value;
            written += 1;
        }
        debug_assert_eq!(self.cells.len(), written);
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) is outside the {0}x{0} grid",
            self.size
        );
        y * self.size + x
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn grid_works() {
        let grid = Grid::with_alive(4, &[(1, 0), (3, 3)]);
        assert_eq!(4, grid.size());
        assert_eq!(1, grid.get(1, 0));
        assert_eq!(0, grid.get(0, 1));
        assert!(grid.is_alive(3, 3));
        assert_eq!(2, grid.population());
        assert_eq!(16, grid.coords().count());
        assert_eq!(Some((3, 0)), grid.coords().nth(3));
        assert_eq!(Some((0, 1)), grid.coords().nth(4));
    }

    #[test]
    fn from_cells_normalizes_values() {
        let grid = Grid::from_cells(2, [0, 5, 1, 0]);
        assert_eq!(1, grid.get(1, 0));
        assert_eq!(1, grid.get(0, 1));
        assert_eq!(2, grid.population());
    }

    #[test]
    fn random_is_binary_and_seeded() {
        let a = Grid::random(50, &mut fastrand::Rng::with_seed(42));
        let b = Grid::random(50, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
        assert!(a.coords().all(|(x, y)| a.get(x, y) <= 1));
        // 2500 fair flips land nowhere near all-dead or all-alive
        let population = a.population();
        assert!(population > 1000 && population < 1500, "{population}");
    }

    #[test]
    fn swap_installs_whole_board() {
        let mut grid = Grid::empty(3);
        let mut next = Grid::with_alive(3, &[(2, 2)]);
        grid.swap_with(&mut next);
        assert_eq!(0, next.population());
        assert!(grid.is_alive(2, 2));
    }

    #[test]
    #[should_panic(expected = "keep the board size")]
    fn swap_rejects_other_size() {
        Grid::empty(3).swap_with(&mut Grid::empty(4));
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn out_of_bounds_read_panics() {
        Grid::empty(3).get(3, 0);
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn single_cell_grid_is_rejected() {
        Grid::empty(1);
    }
}
