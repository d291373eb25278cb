// The intensity grid: one flat row-major buffer of f32 in [0, 1].
// Visual: each entry is how dark one square on the canvas is (0 = white, 1 = black).

use crate::error::Error;
use crate::types::CellUpdate;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<f32>, // length = rows * cols
}

impl Grid {
    /// All-white grid. Zero rows or columns is rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must be at least 1x1, got {rows}x{cols}"
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            Error::InvalidConfig(format!("grid {rows}x{cols} is too large"))
        })?;
        Ok(Self { rows, cols, cells: vec![0.0; len] })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Intensity at (row, col). Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn intensity(&self, row: usize, col: usize) -> f32 {
        self.cells[self.index(row, col)]
    }

    /// Store `value` at (row, col), clamped to [0, 1].
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.index(row, col);
        self.cells[idx] = value.clamp(0.0, 1.0);
    }

    /// One row as a slice (read-only view, no copy).
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    /// Nested copy for callers that want `grid[row][col]`.
    /// Built on demand; the flat buffer stays the only source of truth.
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.cells.chunks(self.cols).map(<[f32]>::to_vec).collect()
    }

    /// Reset every cell to white and report each one, row-major.
    pub fn clear(&mut self) -> Vec<CellUpdate> {
        for c in &mut self.cells { *c = 0.0; }

        let mut updates = Vec::with_capacity(self.cells.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                updates.push(CellUpdate { row, col, intensity: 0.0 });
            }
        }
        updates
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(self.in_bounds(row, col), "cell ({row}, {col}) outside {}x{} grid", self.rows, self.cols);
        row * self.cols + col
    }
}
