// Paint on a fixed grid of cells with the mouse.
// The brush rasterizer and grid are plain data; the window is just one surface.

pub mod brush;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod grid;
pub mod input;
pub mod logger;
pub mod persist;
pub mod session;
pub mod surface;
pub mod types;

pub use brush::{apply_brush, BrushConfig, FalloffMode};
pub use color::intensity_to_color;
pub use error::Error;
pub use grid::Grid;
pub use session::Session;
pub use surface::{render, CellSurface};
pub use types::{CellUpdate, PointerEvent};
