//! Grid module - the settled-block matrix
//!
//! The grid is a fixed 10x20 matrix where each cell is empty or holds the kind
//! of a settled piece. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) with x in 0..10 (left to right) and y in 0..20 (top to
//! bottom). Row 0 is the spawn row; pieces may extend above it (y < 0) while
//! spawning or rotating, which is legal as long as the columns stay in bounds.

use arrayvec::ArrayVec;

use crate::core::pieces::Shape;
use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Cleared-row list, sized for the worst case of every row being full.
/// A single lock clears at most 4, but `set` allows arbitrary grids.
pub type ClearedRows = ArrayVec<usize, { GRID_HEIGHT as usize }>;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision query for a single cell.
    ///
    /// A cell counts as occupied when x is outside the column bounds, y is at
    /// or below the floor, or the cell holds a settled block. Cells above the
    /// top of the grid (y < 0) are NOT occupied so that pieces can exist
    /// partially above the visible grid during spawn.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[(y as usize) * (GRID_WIDTH as usize) + (x as usize)].is_some()
    }

    /// Write a shape into the grid at (x, y) with the given fill.
    ///
    /// Cells above the top of the grid are silently dropped; a legally placed
    /// piece never has any, but this must not panic if one does.
    pub fn place(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.cells() {
            let px = x + dx;
            let py = y + dy;
            if py >= 0 {
                self.set(px, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row simultaneously, shifting the surviving rows down
    /// and padding with empty rows at the top so the height stays fixed.
    ///
    /// Returns the cleared row indices in their original top-to-bottom order.
    /// Uses a two-pointer compaction with zero allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        // Scan from bottom to top, compacting surviving rows downward.
        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Pad the vacated rows at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        // Collected bottom-to-top; report top-to-bottom.
        cleared_rows.reverse();
        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array (for snapshots)
    pub fn to_rows(&self) -> [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize] {
        let mut rows = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        for y in 0..GRID_HEIGHT as usize {
            for x in 0..GRID_WIDTH as usize {
                rows[y][x] = self.cells[y * GRID_WIDTH as usize + x];
            }
        }
        rows
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
