use crate::*;

/// Half-open pixel rectangle: `x1..x2` by `y1..y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

/// Bitmap of a single custom character, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Glyph {
    pub fn extract(grid: &PixelGrid, region: Region) -> Self {
        assert!(region.x2 > region.x1 && region.y2 > region.y1, "empty region: {:?}", region);

        let mut pixels = Vec::new();

        for y in region.y1..region.y2 {
            for x in region.x1..region.x2 {
                pixels.push(grid.get(x, y));
            }
        }

        Self {
            width: region.x2 - region.x1,
            height: region.y2 - region.y1,
            pixels,
        }
    }

    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        self.pixels.iter().copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.pixels.chunks(self.width as usize)
    }

    #[cfg(test)]
    pub(crate) fn is_blank(&self) -> bool {
        self.pixels.iter().all(|pixel| !pixel)
    }

    /// Number of pixels that differ between both glyphs.
    pub fn distance(&self, other: &Self) -> usize {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "glyphs of different sizes can't be compared"
        );

        self.pixels()
            .zip(other.pixels())
            .filter(|(a, b)| a != b)
            .count()
    }
}
