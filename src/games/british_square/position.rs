//! Row-major cell indexing and orthogonal neighbours.

use super::types::Dimensions;

impl Dimensions {
    /// Converts a (row, column) pair to a cell index.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows() && col < self.cols()).then(|| row * self.cols() + col)
    }

    /// Converts a cell index to its (row, column) pair.
    pub fn row_col(&self, index: usize) -> Option<(usize, usize)> {
        self.contains(index).then(|| (index / self.cols(), index % self.cols()))
    }

    /// The in-bounds orthogonal neighbours of `index`: above, below, left, right.
    ///
    /// Yields nothing for an out-of-bounds index.
    pub fn neighbours(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let cols = self.cols();
        let total = self.cells();
        let inside = index < total;

        let above = (inside && index >= cols).then(|| index - cols);
        let below = (inside && index < total - cols).then(|| index + cols);
        let left = (inside && index % cols != 0).then(|| index - 1);
        let right = (inside && index % cols != cols - 1).then(|| index + 1);

        [above, below, left, right].into_iter().flatten()
    }
}
