use crate::*;
use anyhow::{ensure, Result};

/// Number of custom-character slots an HD44780-style controller provides.
pub const MAX_SLOTS: u32 = 8;

#[derive(Clone, Debug)]
pub struct Params {
    pub(crate) cell_width: u32,
    pub(crate) cell_height: u32,
    pub(crate) rows: u32,
    pub(crate) columns: u32,
    pub(crate) gutter: u32,
    pub(crate) threshold: usize,
    pub(crate) first_frame: FirstFrame,
}

impl Params {
    pub fn new(cell_width: u32, cell_height: u32, rows: u32, columns: u32, gutter: u32) -> Result<Self> {
        ensure!(cell_width > 0, "Cell width must be at least 1");
        ensure!(cell_height > 0, "Cell height must be at least 1");

        // every glyph row is sent to the device as a single byte
        ensure!(cell_width <= 8, "Cell width must not exceed 8 pixels");

        // `createChar` always sends 8 rows
        ensure!(cell_height <= 8, "Cell height must not exceed 8 pixels");

        ensure!(rows > 0 && columns > 0, "Layout needs at least one row and column");

        ensure!(
            rows.checked_mul(columns).map_or(false, |slots| slots <= MAX_SLOTS),
            "Layout of {}x{} cells doesn't fit into {} glyph slots",
            columns,
            rows,
            MAX_SLOTS
        );

        ensure!(
            extent(columns, cell_width, gutter).is_some() && extent(rows, cell_height, gutter).is_some(),
            "Gutter of {} pixels makes the layout larger than any image",
            gutter
        );

        Ok(Self {
            cell_width,
            cell_height,
            rows,
            columns,
            gutter,
            threshold: 0,
            first_frame: FirstFrame::default(),
        })
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_first_frame(mut self, first_frame: FirstFrame) -> Self {
        self.first_frame = first_frame;
        self
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn slots(&self) -> usize {
        (self.rows * self.columns) as usize
    }

    /// Smallest image width that contains every cell.
    pub fn min_width(&self) -> u32 {
        self.cell_x1(self.columns - 1)
    }

    /// Smallest image height that contains every cell.
    pub fn min_height(&self) -> u32 {
        self.cell_y1(self.rows - 1)
    }

    pub(crate) fn cell_x0(&self, col: u32) -> u32 {
        col * (self.cell_width + self.gutter)
    }

    pub(crate) fn cell_x1(&self, col: u32) -> u32 {
        self.cell_x0(col) + self.cell_width
    }

    pub(crate) fn cell_y0(&self, row: u32) -> u32 {
        row * (self.cell_height + self.gutter)
    }

    pub(crate) fn cell_y1(&self, row: u32) -> u32 {
        self.cell_y0(row) + self.cell_height
    }

    /// Slots are numbered row-major, left to right.
    pub(crate) fn slot_idx(&self, row: u32, col: u32) -> usize {
        (row * self.columns + col) as usize
    }

    pub(crate) fn region(&self, row: u32, col: u32) -> Region {
        Region {
            x1: self.cell_x0(col),
            y1: self.cell_y0(row),
            x2: self.cell_x1(col),
            y2: self.cell_y1(row),
        }
    }
}

/// Pixels spanned by `cells` cells of `size` pixels separated by `gutter`.
fn extent(cells: u32, size: u32, gutter: u32) -> Option<u32> {
    (cells - 1).checked_mul(size.checked_add(gutter)?)?.checked_add(size)
}

impl Default for Params {
    /// 16x2 character display: two rows of four 5x8 cells, 1px apart.
    fn default() -> Self {
        Self {
            cell_width: 5,
            cell_height: 8,
            rows: 2,
            columns: 4,
            gutter: 1,
            threshold: 0,
            first_frame: FirstFrame::default(),
        }
    }
}
