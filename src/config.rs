// Start-up configuration: parsed once from the command line, validated, then frozen.

use std::path::PathBuf;

use clap::Parser;

use crate::brush::{BrushConfig, FalloffMode};
use crate::error::Error;
use crate::persist::DEFAULT_FILE_NAME;

/// Paint on a grid of cells with the mouse. Left button paints,
/// S saves, C clears, Esc quits.
#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-brush")]
pub struct Args {
    /// Grid rows.
    #[arg(long, default_value_t = 30)]
    pub rows: usize,

    /// Grid columns.
    #[arg(long, default_value_t = 30)]
    pub cols: usize,

    /// Edge length of one cell in pixels.
    #[arg(long, default_value_t = 20)]
    pub cell_size: usize,

    /// Brush reach, in cells (ignored by the `none` toggle brush).
    #[arg(long, default_value_t = 1.5)]
    pub brush_radius: f32,

    /// Brush falloff: `none` toggles single cells black.
    #[arg(long, value_enum, default_value_t = FalloffMode::None)]
    pub falloff: FalloffMode,

    /// Where Save writes the pixel map.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_FILE_NAME)]
    pub output: PathBuf,

    /// Start from a previously saved pixel map instead of a blank grid.
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,
}

/// Validated session parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub brush: BrushConfig,
    pub output: PathBuf,
    pub load: Option<PathBuf>,
}

impl SessionConfig {
    pub fn new(rows: usize, cols: usize, brush: BrushConfig, output: PathBuf) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid must be at least 1x1, got {rows}x{cols}"
            )));
        }
        // the canvas buffer holds (cols * cs) * (rows * cs) pixels
        let cs = brush.cell_size();
        let pixels = cols
            .checked_mul(cs)
            .zip(rows.checked_mul(cs))
            .and_then(|(w, h)| w.checked_mul(h));
        if pixels.is_none() {
            return Err(Error::InvalidConfig(format!(
                "{rows}x{cols} grid of {cs} px cells is too large"
            )));
        }
        Ok(Self { rows, cols, brush, output, load: None })
    }

    /// Canvas size in pixels (width, height).
    pub fn canvas_size(&self) -> (usize, usize) {
        let cs = self.brush.cell_size();
        (self.cols * cs, self.rows * cs)
    }
}

impl Default for SessionConfig {
    /// The classic 30x30 toggle drawer.
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 30,
            brush: BrushConfig::default(),
            output: PathBuf::from(DEFAULT_FILE_NAME),
            load: None,
        }
    }
}

impl TryFrom<Args> for SessionConfig {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self, Error> {
        let brush = BrushConfig::new(args.cell_size, args.brush_radius, args.falloff)?;
        let mut config = SessionConfig::new(args.rows, args.cols, brush, args.output)?;
        config.load = args.load;
        Ok(config)
    }
}
