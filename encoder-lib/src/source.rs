use crate::*;
use ::image::ImageReader;
use anyhow::{Context, Result};
pub use std::path::{Path, PathBuf};
use tracing::debug;

/// Image files to encode, in lexicographic order.
#[derive(Clone, Debug, Default)]
pub struct Source {
    paths: Vec<PathBuf>,
}

impl Source {
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let paths = glob::glob(pattern)
            .with_context(|| format!("Invalid file pattern: {}", pattern))?;

        let mut paths = paths
            .map(|path| path.context("Couldn't read frame path"))
            .collect::<Result<Vec<_>>>()?;

        paths.retain(|path| path.is_file());
        paths.sort();

        debug!(pattern, count = paths.len(), "found frames");

        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Decodes and binarizes a single frame.
    pub fn load(path: &Path, level: u8) -> Result<PixelGrid> {
        let image = ImageReader::open(path)
            .with_context(|| format!("Couldn't open frame: {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("Couldn't read frame: {}", path.display()))?
            .decode()
            .with_context(|| format!("Couldn't decode frame: {}", path.display()))?;

        Ok(PixelGrid::binarize(&image.to_rgb8(), level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::Rgb;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lcd-glyph-encoder-{}-{}", name, std::process::id()));

        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn paths_are_sorted() {
        let dir = scratch_dir("sorted");

        for name in ["frame_10.png", "frame_02.png", "frame_01.png", "notes.txt"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let source = Source::from_pattern(&dir.join("*.png").to_string_lossy()).unwrap();
        let names: Vec<_> = source
            .paths()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["frame_01.png", "frame_02.png", "frame_10.png"]);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn no_matches() {
        let dir = scratch_dir("empty");
        let source = Source::from_pattern(&dir.join("*.png").to_string_lossy()).unwrap();

        assert!(source.is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn invalid_pattern() {
        assert!(Source::from_pattern("frames/[").is_err());
    }

    #[test]
    fn load() {
        let dir = scratch_dir("load");
        let path = dir.join("frame.png");
        let mut img = RgbImage::new(4, 2);

        img.put_pixel(3, 1, Rgb([255, 255, 255]));
        img.save(&path).unwrap();

        let grid = Source::load(&path, 127).unwrap();

        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert!(grid.get(3, 1));
        assert!(!grid.get(0, 0));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_garbage() {
        let dir = scratch_dir("garbage");
        let path = dir.join("frame.png");

        fs::write(&path, b"definitely not a png").unwrap();

        assert!(Source::load(&path, 127).is_err());

        fs::remove_dir_all(dir).unwrap();
    }
}
