mod delta;
mod frame;
mod glyph;
mod grid;
mod params;
mod sketch;
mod source;
mod stats;

pub use ::image::RgbImage;
use anyhow::{Context, Result};
use tracing::{debug, warn};

pub use self::{delta::*, frame::*, glyph::*, grid::*, params::*, sketch::*, source::*, stats::*};

/// Turns consecutive frames into an Arduino sketch that redefines only the
/// glyph slots which changed.
#[derive(Debug)]
pub struct Encoder<'a> {
    params: &'a Params,
    target: &'a Target,
    delta: DeltaEncoder<'a>,
    sketch: Sketch,
}

impl<'a> Encoder<'a> {
    pub fn new(params: &'a Params, target: &'a Target) -> Result<Self> {
        let sketch = Sketch::new(params, target).context("Couldn't write preamble")?;

        Ok(Self {
            params,
            target,
            delta: DeltaEncoder::new(params),
            sketch,
        })
    }

    /// Encodes the next image; returns `false` if it had to be skipped.
    pub fn add(&mut self, name: &str, grid: &PixelGrid) -> Result<bool> {
        self.sketch.comment(&format!("processing  {}", name))?;

        let frame = match Frame::new(self.params, grid) {
            Some(frame) => frame,

            None => {
                warn!(
                    frame = name,
                    width = grid.width(),
                    height = grid.height(),
                    min_width = self.params.min_width(),
                    min_height = self.params.min_height(),
                    "image too small, skipping"
                );

                self.sketch.comment(&format!(
                    "skipped: image is {}x{}, at least {}x{} is required",
                    grid.width(),
                    grid.height(),
                    self.params.min_width(),
                    self.params.min_height()
                ))?;

                self.delta.skip();

                return Ok(false);
            }
        };

        let first = !self.delta.has_prev();
        let updates = self.delta.encode(frame);

        if first && self.params.first_frame == FirstFrame::Skip {
            warn!(frame = name, "first frame is not drawn, it only seeds the comparison");
            self.sketch.comment("first frame is not drawn, it only seeds the comparison")?;
        }

        debug!(frame = name, updates = updates.len(), "encoded");

        for update in &updates {
            self.sketch.update(update)?;
        }

        self.sketch.pause(self.target)?;

        Ok(true)
    }

    pub fn finish(self) -> Result<(Stats, String)> {
        let stats = self.delta.into_stats();
        let code = self.sketch.finish(&stats).context("Couldn't write trailer")?;

        Ok((stats, code))
    }
}
