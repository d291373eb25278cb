// One drawing session: the grid, the brush and the save target.
// Every UI action (press/drag, Clear, Save) lands here and is handled to
// completion before the next one.

use std::path::Path;

use crate::brush::apply_brush;
use crate::config::SessionConfig;
use crate::error::Error;
use crate::grid::Grid;
use crate::persist;
use crate::surface::{render, CellSurface};
use crate::types::{CellUpdate, PointerEvent};

pub struct Session {
    grid: Grid,
    config: SessionConfig,
}

impl Session {
    /// Blank grid, or the `load` map when one is configured.
    pub fn new(config: SessionConfig) -> Result<Self, Error> {
        let grid = match &config.load {
            Some(path) => {
                let grid = persist::load_pixel_map(path, config.rows, config.cols)?;
                log::info!("loaded pixel map from {}", path.display());
                grid
            }
            None => Grid::new(config.rows, config.cols)?,
        };
        Ok(Self { grid, config })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output
    }

    /// Mouse-down or drag sample at a canvas pixel.
    pub fn press_or_drag(&mut self, event: PointerEvent) -> Vec<CellUpdate> {
        apply_brush(&mut self.grid, &self.config.brush, event.x, event.y)
    }

    pub fn clear(&mut self) -> Vec<CellUpdate> {
        log::info!("clearing {}x{} grid", self.grid.rows(), self.grid.cols());
        self.grid.clear()
    }

    /// One best-effort write to the configured path. A failure leaves the grid as is.
    pub fn save(&self) -> Result<&Path, Error> {
        let path = self.output_path();
        persist::save_pixel_map(&self.grid, path)?;
        log::info!("pixel map saved to {}", path.display());
        Ok(path)
    }

    /// Paint every cell from the grid (start-up, or after a load).
    pub fn repaint_all<S: CellSurface + ?Sized>(&self, surface: &mut S) {
        let mut updates = Vec::with_capacity(self.grid.rows() * self.grid.cols());
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                updates.push(CellUpdate { row, col, intensity: self.grid.intensity(row, col) });
            }
        }
        render(&updates, surface);
    }
}
