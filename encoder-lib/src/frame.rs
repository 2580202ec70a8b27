use crate::*;

/// One glyph per slot; `glyphs[i]` is what slot `i` should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    glyphs: Vec<Glyph>,
}

impl Frame {
    /// Cuts the grid into cells; returns `None` when the grid is too small
    /// to contain all of them.
    pub fn new(params: &Params, grid: &PixelGrid) -> Option<Self> {
        if grid.width() < params.min_width() || grid.height() < params.min_height() {
            return None;
        }

        let mut glyphs = Vec::with_capacity(params.slots());

        for row in 0..params.rows() {
            for col in 0..params.columns() {
                debug_assert_eq!(glyphs.len(), params.slot_idx(row, col));

                glyphs.push(Glyph::extract(grid, params.region(row, col)));
            }
        }

        Some(Self { glyphs })
    }

    #[cfg(test)]
    pub(crate) fn blank(params: &Params) -> Self {
        Self {
            glyphs: vec![Glyph::blank(params.cell_width(), params.cell_height()); params.slots()],
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyph(&self, slot: usize) -> &Glyph {
        &self.glyphs[slot]
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> + '_ {
        self.glyphs.iter()
    }

    /// Redefines a slot the way the display does on `createChar`.
    pub fn apply(&mut self, update: &Update) {
        self.glyphs[update.slot] = update.glyph.clone();
    }
}
