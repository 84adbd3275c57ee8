//! Field module - the grid engine
//!
//! A fixed 12x6 grid of cells stored as a flat row-major array for cache
//! locality. `BlockType::Empty` is a cell value, never an absence. Row 0 is
//! the bottom row; column 0 is the far wall, so a flung block slides across
//! the high-index columns and comes to rest against the packed prefix.
//!
//! The field owns the landing rule, match detection, clearing, and the
//! collapse/cascade loop. After any resolution pass returns, every row's
//! non-empty cells form a contiguous prefix starting at column 0.

use arrayvec::ArrayVec;

use crate::core::Block;
use crate::types::{
    BlockType, BLOCK_SIZE, FIELD_CELLS, FIELD_HEIGHT, FIELD_ORIGIN_X, FIELD_ORIGIN_Y, FIELD_WIDTH,
    MATCH_MIN,
};

/// Bounded list of cell coordinates, used for cascade seeds and moved cells
type CellList = ArrayVec<(usize, usize), FIELD_CELLS>;

/// The block field - 12 rows x 6 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct BlockField {
    /// Flat array of cell colors, row-major order (row * WIDTH + col)
    cells: [BlockType; FIELD_CELLS],
    /// Running total of cells cleared by match resolution
    cleared_cells: usize,
}

impl BlockField {
    /// Create a new all-empty field
    pub fn new() -> Self {
        Self {
            cells: [BlockType::Empty; FIELD_CELLS],
            cleared_cells: 0,
        }
    }

    /// Calculate flat index from (row, col); callers guarantee bounds
    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        row * FIELD_WIDTH + col
    }

    pub fn width(&self) -> usize {
        FIELD_WIDTH
    }

    pub fn height(&self) -> usize {
        FIELD_HEIGHT
    }

    /// Get the cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<BlockType> {
        (row < FIELD_HEIGHT && col < FIELD_WIDTH).then(|| self.cells[Self::index(row, col)])
    }

    /// Set a cell directly. Meant for preset boards and tests; gameplay
    /// mutation goes through [`BlockField::attempt_land`]
    pub fn set(&mut self, row: usize, col: usize, kind: BlockType) -> bool {
        if row < FIELD_HEIGHT && col < FIELD_WIDTH {
            self.cells[Self::index(row, col)] = kind;
            true
        } else {
            false
        }
    }

    /// Flat row-major view of the grid
    pub fn cells(&self) -> &[BlockType] {
        &self.cells
    }

    /// Total cells cleared since construction
    pub fn cleared(&self) -> usize {
        self.cleared_cells
    }

    /// World x of a column's cell origin. Column 0 sits at the far wall,
    /// farthest from the entry edge
    pub fn cell_x(col: usize) -> f32 {
        FIELD_ORIGIN_X + (FIELD_WIDTH - 1 - col) as f32 * BLOCK_SIZE
    }

    /// World y of a row's cell origin; row 0 is the bottom row
    pub fn row_y(row: usize) -> f32 {
        FIELD_ORIGIN_Y + row as f32 * BLOCK_SIZE
    }

    /// The row whose vertical band contains `y`, if any
    pub fn row_for_y(y: f32) -> Option<usize> {
        if y < FIELD_ORIGIN_Y {
            return None;
        }
        let row = ((y - FIELD_ORIGIN_Y) / BLOCK_SIZE) as usize;
        (row < FIELD_HEIGHT).then_some(row)
    }

    /// Resolve a flung block's target row from the fling's y coordinate and
    /// snap the block onto that row's band. A miss leaves `block.row` unset;
    /// such a block can never land and flies off the far side
    pub fn clamp_to_row(&self, block: &mut Block, touch_y: f32) {
        block.row = Self::row_for_y(touch_y);
        if let Some(row) = block.row {
            block.position.y = Self::row_y(row);
        }
    }

    /// True iff the row has no empty cell. Out-of-range rows are not full;
    /// they are unlandable and handled as landing failures instead
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= FIELD_HEIGHT {
            return false;
        }
        let start = Self::index(row, 0);
        self.cells[start..start + FIELD_WIDTH]
            .iter()
            .all(|kind| kind.is_color())
    }

    /// The frontier cell of a row: the lowest-index empty cell, adjacent to
    /// the packed prefix (column 0 when the row is empty). `None` if full
    pub fn frontier(&self, row: usize) -> Option<usize> {
        if row >= FIELD_HEIGHT {
            return None;
        }
        let start = Self::index(row, 0);
        self.cells[start..start + FIELD_WIDTH]
            .iter()
            .position(|kind| !kind.is_color())
    }

    /// Try to absorb a flung block into its target row.
    ///
    /// Fails without mutation when the block has no valid row, the row is
    /// full, or the block has not yet slid far enough to reach the frontier
    /// cell. On success the frontier cell takes the block's color and a
    /// match-resolution pass runs seeded at that cell.
    pub fn attempt_land(&mut self, block: &Block) -> bool {
        let Some(row) = block.row else {
            return false;
        };
        if row >= FIELD_HEIGHT {
            return false;
        }
        let Some(col) = self.frontier(row) else {
            return false;
        };
        // Slide until you hit something: the block keeps moving until it
        // reaches-or-passes the frontier cell's x
        if block.position.x < Self::cell_x(col) {
            return false;
        }

        self.cells[Self::index(row, col)] = block.kind;
        self.resolve_matches(&[(row, col)]);
        true
    }

    /// Run the full clear/collapse cascade from the given seed cells.
    ///
    /// Each pass marks every horizontal and vertical run of length
    /// `MATCH_MIN` or more through a seed, sweeps all marked cells to empty
    /// in one pass over the grid, collapses every row toward column 0, and
    /// feeds the cells that received moved colors back in as the next seeds.
    /// The work-list loop terminates because a collapse only moves cells
    /// when the preceding sweep cleared at least one.
    ///
    /// Returns the total number of cells cleared across all passes.
    pub fn resolve_matches(&mut self, seeds_in: &[(usize, usize)]) -> usize {
        let mut total = 0;

        // Deduplicate and bounds-check the caller's seeds; marking is
        // idempotent but the work list holds at most one entry per cell
        let mut seen = [false; FIELD_CELLS];
        let mut seeds: CellList = CellList::new();
        for &(row, col) in seeds_in {
            if row < FIELD_HEIGHT && col < FIELD_WIDTH && !seen[Self::index(row, col)] {
                seen[Self::index(row, col)] = true;
                seeds.push((row, col));
            }
        }

        while !seeds.is_empty() {
            // Fresh scratch bitmap per pass; runs from different seeds may
            // overlap and marking is idempotent
            let mut matched = [false; FIELD_CELLS];
            for &(row, col) in &seeds {
                self.mark_runs(row, col, &mut matched);
            }

            // Global sweep: overlapping runs clear once
            let mut cleared = 0;
            for (idx, hit) in matched.iter().enumerate() {
                if *hit {
                    self.cells[idx] = BlockType::Empty;
                    cleared += 1;
                }
            }
            total += cleared;

            let mut moved = CellList::new();
            for row in 0..FIELD_HEIGHT {
                self.collapse_row(row, &mut moved);
            }
            seeds = moved;
        }

        self.cleared_cells += total;
        total
    }

    /// Mark the horizontal and vertical runs through (row, col) if they meet
    /// the match threshold. The two directions are judged independently;
    /// either one reaching the threshold confirms its whole run
    fn mark_runs(&self, row: usize, col: usize, matched: &mut [bool; FIELD_CELLS]) {
        let kind = self.cells[Self::index(row, col)];
        if !kind.is_color() {
            return;
        }

        let mut lo = col;
        while lo > 0 && self.cells[Self::index(row, lo - 1)] == kind {
            lo -= 1;
        }
        let mut hi = col;
        while hi + 1 < FIELD_WIDTH && self.cells[Self::index(row, hi + 1)] == kind {
            hi += 1;
        }
        if hi - lo + 1 >= MATCH_MIN {
            for c in lo..=hi {
                matched[Self::index(row, c)] = true;
            }
        }

        let mut lo = row;
        while lo > 0 && self.cells[Self::index(lo - 1, col)] == kind {
            lo -= 1;
        }
        let mut hi = row;
        while hi + 1 < FIELD_HEIGHT && self.cells[Self::index(hi + 1, col)] == kind {
            hi += 1;
        }
        if hi - lo + 1 >= MATCH_MIN {
            for r in lo..=hi {
                matched[Self::index(r, col)] = true;
            }
        }
    }

    /// Pack one row's colors into a contiguous prefix at column 0 with a
    /// two-pointer pass, recording each destination cell that received a
    /// moved color. Gravity pulls along the row toward the far wall
    fn collapse_row(&mut self, row: usize, moved: &mut CellList) {
        let mut write = 0;
        for read in 0..FIELD_WIDTH {
            if self.cells[Self::index(row, read)].is_color() {
                if read != write {
                    self.cells[Self::index(row, write)] = self.cells[Self::index(row, read)];
                    self.cells[Self::index(row, read)] = BlockType::Empty;
                    moved.push((row, write));
                }
                write += 1;
            }
        }
    }

    /// Copy the grid into a row-major 2D array (for snapshots)
    pub fn write_rows(&self, out: &mut [[BlockType; FIELD_WIDTH]; FIELD_HEIGHT]) {
        for row in 0..FIELD_HEIGHT {
            let start = Self::index(row, 0);
            out[row].copy_from_slice(&self.cells[start..start + FIELD_WIDTH]);
        }
    }

    /// Build a field from per-row cell arrays, row 0 first (for testing)
    #[cfg(test)]
    pub fn from_rows(rows: &[[BlockType; FIELD_WIDTH]]) -> Self {
        let mut field = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &kind) in cells.iter().enumerate() {
                field.set(row, col, kind);
            }
        }
        field
    }

    /// One row as an array (for testing)
    #[cfg(test)]
    pub fn row(&self, row: usize) -> [BlockType; FIELD_WIDTH] {
        let start = Self::index(row, 0);
        let mut out = [BlockType::Empty; FIELD_WIDTH];
        out.copy_from_slice(&self.cells[start..start + FIELD_WIDTH]);
        out
    }
}

impl Default for BlockField {
    fn default() -> Self {
        Self::new()
    }
}
