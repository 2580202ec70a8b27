use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::ParallelProgressIterator;
use lcd_glyph_encoder_lib::{Encoder, FirstFrame, Params, PathBuf, PixelGrid, Source, Stats, Target};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::fs;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "lcd-glyph-encoder",
    about = "Convert a sequence of images into an Arduino sketch animating a character LCD"
)]
struct Cli {
    /// Images to encode, processed in lexicographic order
    #[arg(short, long, default_value = "*.png")]
    pattern: String,

    /// Number of pixels a glyph may differ by before it gets redefined (0 = lossless)
    #[arg(short, long, default_value = "0")]
    threshold: usize,

    /// Code inserted after every frame
    #[arg(long, default_value = "  delay(250);", allow_hyphen_values = true)]
    pause: String,

    /// Brightness above which a pixel is considered lit
    #[arg(long, default_value = "127")]
    level: u8,

    /// What to do with the first image, which has nothing to be compared with
    #[arg(long, value_enum, default_value = "skip")]
    first_frame: FirstFrameArg,

    /// Glyph width in pixels
    #[arg(long, default_value = "5")]
    cell_width: u32,

    /// Glyph height in pixels
    #[arg(long, default_value = "8")]
    cell_height: u32,

    /// Rows of glyphs
    #[arg(long, default_value = "2")]
    rows: u32,

    /// Glyphs per row
    #[arg(long, default_value = "4")]
    columns: u32,

    /// Pixels between neighbouring glyphs
    #[arg(long, default_value = "1")]
    gutter: u32,

    /// Text columns of the display
    #[arg(long, default_value = "16")]
    lcd_columns: u32,

    /// LiquidCrystal pins (rs, enable, d4, d5, d6, d7)
    #[arg(long, value_delimiter = ',', default_value = "22,21,19,18,17,16")]
    pins: Vec<u8>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstFrameArg {
    /// Only use it as a reference for the second image (original behavior)
    Skip,
    /// Define every glyph slot from it
    Full,
}

impl From<FirstFrameArg> for FirstFrame {
    fn from(arg: FirstFrameArg) -> Self {
        match arg {
            FirstFrameArg::Skip => FirstFrame::Skip,
            FirstFrameArg::Full => FirstFrame::Full,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        })
        .init();

    let params = Params::new(cli.cell_width, cli.cell_height, cli.rows, cli.columns, cli.gutter)
        .context("Invalid glyph layout")?
        .with_threshold(cli.threshold)
        .with_first_frame(cli.first_frame.into());

    let target = Target {
        pins: cli.pins,
        lcd_columns: cli.lcd_columns,
        pause: cli.pause,
    };

    let source = Source::from_pattern(&cli.pattern)?;

    if source.is_empty() {
        warn!(pattern = %cli.pattern, "no images found");
    } else {
        info!(pattern = %cli.pattern, count = source.len(), "found images");
    }

    let grids = load_grids(&source, cli.level)?;
    let (stats, code) = perform_encoding(&params, &target, &grids)?;

    report(&stats);

    match cli.output {
        Some(path) => {
            fs::write(&path, code).with_context(|| format!("Couldn't write {}", path.display()))?;
            info!(output = %path.display(), "sketch written");
        }

        None => print!("{}", code),
    }

    Ok(())
}

/// Decodes every image up front, so that a broken file aborts the run
/// before any code is written.
fn load_grids(source: &Source, level: u8) -> Result<Vec<(String, PixelGrid)>> {
    let len = source.len();

    source
        .paths()
        .par_iter()
        .progress_count(len as u64)
        .map(|path| -> Result<_> {
            let grid = Source::load(path, level)?;

            Ok((path.display().to_string(), grid))
        })
        .collect()
}

fn perform_encoding(params: &Params, target: &Target, grids: &[(String, PixelGrid)]) -> Result<(Stats, String)> {
    let mut encoder = Encoder::new(params, target)?;

    for (name, grid) in grids {
        encoder.add(name, grid)?;
    }

    encoder.finish()
}

fn report(stats: &Stats) {
    let pct = match stats.percentage_emitted() {
        Some(pct) => format!("{:.2}%", pct),
        None => "N/A".into(),
    };

    info!(
        frames = stats.frames,
        skipped = stats.skipped,
        changed = stats.changed,
        total = stats.total,
        emitted = %pct,
        "done"
    );

    if stats.skipped > 0 {
        warn!(skipped = stats.skipped, "some images were too small and got skipped");
    }
}
