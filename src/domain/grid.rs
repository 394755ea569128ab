//! Occupancy grid the agent moves through.
//!
//! Cells are unit squares; a value of 0 is open, anything else is solid. The
//! matrix is stored row-major with row 0 at the top, while world coordinates
//! have Y growing upward, so world-cell queries flip the row index.

/// Immutable occupancy map with fixed dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from matrix rows as an external level loader provides
    /// them, top row first. Rows are assumed to be of equal length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let cols = rows.first().map(Vec::len).unwrap_or_default();
        Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// An open grid with the listed world cells marked solid.
    pub fn with_solid_cells(rows: usize, cols: usize, solid: &[(i64, i64)]) -> Self {
        let mut grid = Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };
        for &(cell_x, cell_y) in solid {
            if let Some(idx) = grid.index_of(cell_x, cell_y) {
                grid.cells[idx] = 1;
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the world cell with bottom-left corner `(cell_x, cell_y)` is
    /// solid. Cells outside the grid read as open; the collision resolver
    /// routinely probes past the boundary and must ignore those cells.
    pub fn is_solid(&self, cell_x: i64, cell_y: i64) -> bool {
        match self.index_of(cell_x, cell_y) {
            Some(idx) => self.cells[idx] != 0,
            None => false,
        }
    }

    fn index_of(&self, cell_x: i64, cell_y: i64) -> Option<usize> {
        if cell_x < 0 || cell_y < 0 || cell_x >= self.cols as i64 || cell_y >= self.rows as i64 {
            return None;
        }
        // World Y grows upward, storage rows grow downward.
        let row = self.rows - 1 - cell_y as usize;
        Some(row * self.cols + cell_x as usize)
    }
}
