use crate::*;

/// Binarized image: one `bool` per pixel, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl PixelGrid {
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut pixels = Vec::with_capacity((width * height) as usize);

        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// A pixel is lit when the mean of its channels exceeds `level`.
    pub fn binarize(img: &RgbImage, level: u8) -> Self {
        Self::from_fn(img.width(), img.height(), |x, y| {
            let [r, g, b] = img.get_pixel(x, y).0;
            let sum = r as u32 + g as u32 + b as u32;

            sum > 3 * (level as u32)
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside of {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );

        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        assert!(x < self.width && y < self.height);

        self.pixels[(y * self.width + x) as usize] = value;
    }
}
