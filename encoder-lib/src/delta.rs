use crate::*;
use tracing::debug;

/// What to do with the first frame, which has nothing to be compared with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FirstFrame {
    /// Only remember it; the display keeps showing the blank glyphs from
    /// the preamble until the second frame arrives.
    #[default]
    Skip,

    /// Define every slot from it; custom-character memory holds garbage
    /// until it's written.
    Full,
}

/// Instruction to redefine `slot` with `glyph`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Update {
    pub slot: usize,
    pub glyph: Glyph,
}

#[derive(Debug)]
pub struct DeltaEncoder<'a> {
    params: &'a Params,
    stats: Stats,
    prev: Option<Frame>,
}

impl<'a> DeltaEncoder<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self {
            params,
            stats: Default::default(),
            prev: Default::default(),
        }
    }

    /// Returns slot redefinitions (in slot order) that turn the previous
    /// frame into `curr`, and remembers `curr` as the previous frame.
    pub fn encode(&mut self, curr: Frame) -> Vec<Update> {
        assert_eq!(curr.len(), self.params.slots(), "frame doesn't match the layout");

        let updates = match (self.prev.take(), self.params.first_frame) {
            (Some(prev), _) => self.diff(&prev, &curr),
            (None, FirstFrame::Full) => self.define_all(&curr),
            (None, FirstFrame::Skip) => {
                debug!("first frame only seeds the previous frame");
                Vec::new()
            }
        };

        self.stats.frames += 1;
        self.prev = Some(curr);

        updates
    }

    /// Records an image that produced no frame; the previous frame stays.
    pub fn skip(&mut self) {
        self.stats.skipped += 1;
    }

    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    #[cfg(test)]
    pub(crate) fn prev(&self) -> Option<&Frame> {
        self.prev.as_ref()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_stats(self) -> Stats {
        self.stats
    }

    fn diff(&mut self, prev: &Frame, curr: &Frame) -> Vec<Update> {
        let mut updates = Vec::new();

        for (slot, (prev, curr)) in prev.glyphs().zip(curr.glyphs()).enumerate() {
            let distance = curr.distance(prev);

            self.stats.total += 1;

            if distance > self.params.threshold {
                self.stats.changed += 1;

                updates.push(Update {
                    slot,
                    glyph: curr.clone(),
                });
            }
        }

        updates
    }

    fn define_all(&mut self, curr: &Frame) -> Vec<Update> {
        self.stats.total += curr.len();
        self.stats.changed += curr.len();

        curr.glyphs()
            .enumerate()
            .map(|(slot, glyph)| Update {
                slot,
                glyph: glyph.clone(),
            })
            .collect()
    }
}
