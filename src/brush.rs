// Brush rasterizer: turns one pointer position (pixels) into cell-intensity updates.
// Visual expectation: holding the mouse and dragging leaves a soft dark trail;
// going over the same spot again only ever darkens it, never lightens it.

use std::ops::RangeInclusive;

use crate::error::Error;
use crate::grid::Grid;
use crate::types::CellUpdate;

/// How the target intensity falls off with distance from the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FalloffMode {
    /// Binary toggle: the cell under the pointer turns black, nothing else.
    #[default]
    None,
    /// 1.0 at the pointer, 0.0 at the rim.
    Linear,
    /// Flat black core, linear ramp across the outermost cell-width ring.
    TwoZone,
}

/// Per-session brush parameters. Validated once; immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushConfig {
    cell_size: usize,  // pixel edge of one cell
    brush_radius: f32, // in cell units
    falloff: FalloffMode,
}

impl BrushConfig {
    pub fn new(cell_size: usize, brush_radius: f32, falloff: FalloffMode) -> Result<Self, Error> {
        if cell_size == 0 {
            return Err(Error::InvalidConfig("cell size must be positive".into()));
        }
        if !(brush_radius.is_finite() && brush_radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "brush radius must be a positive number of cells, got {brush_radius}"
            )));
        }
        Ok(Self { cell_size, brush_radius, falloff })
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn brush_radius(&self) -> f32 {
        self.brush_radius
    }

    pub fn falloff(&self) -> FalloffMode {
        self.falloff
    }

    /// Brush reach in pixels.
    pub fn radius_pixels(&self) -> f32 {
        self.brush_radius * self.cell_size as f32
    }
}

impl Default for BrushConfig {
    /// 20 px cells, 1.5-cell reach, toggle brush.
    fn default() -> Self {
        Self { cell_size: 20, brush_radius: 1.5, falloff: FalloffMode::None }
    }
}

/// Paint at pixel (x, y). Returns the cells that changed, row-major.
/// Pointers outside the canvas are fine; they simply touch fewer (or no) cells.
pub fn apply_brush(grid: &mut Grid, config: &BrushConfig, x: f32, y: f32) -> Vec<CellUpdate> {
    match config.falloff {
        FalloffMode::None => toggle_cell(grid, config, x, y).into_iter().collect(),
        FalloffMode::Linear | FalloffMode::TwoZone => dab(grid, config, x, y),
    }
}

/// Cells scanned for a dab at (x, y): rows then cols, already clamped to the grid.
/// The extra cell of slack on each side keeps truncation from dropping a cell
/// whose center is still inside the radius.
pub fn bounding_box(
    grid: &Grid,
    config: &BrushConfig,
    x: f32,
    y: f32,
) -> Option<(RangeInclusive<usize>, RangeInclusive<usize>)> {
    let cs = config.cell_size as f32;
    let rows = axis_range(y / cs, config.brush_radius, grid.rows())?;
    let cols = axis_range(x / cs, config.brush_radius, grid.cols())?;
    Some((rows, cols))
}

fn axis_range(center: f32, radius: f32, len: usize) -> Option<RangeInclusive<usize>> {
    if !center.is_finite() {
        return None;
    }
    let lo = (center - radius - 1.0).floor();
    let hi = (center + radius + 1.0).ceil();
    let max = (len - 1) as f32;
    if hi < 0.0 || lo > max {
        return None; // whole brush is off this side of the canvas
    }
    Some(lo.max(0.0) as usize..=hi.min(max) as usize)
}

fn dab(grid: &mut Grid, config: &BrushConfig, x: f32, y: f32) -> Vec<CellUpdate> {
    let mut updates = Vec::new();
    let Some((rows, cols)) = bounding_box(grid, config, x, y) else {
        return updates;
    };

    let cs = config.cell_size as f32;
    let radius = config.radius_pixels();

    for i in rows {
        for j in cols.clone() {
            let cx = j as f32 * cs + cs / 2.0; // cell center in pixels
            let cy = i as f32 * cs + cs / 2.0;
            let (dx, dy) = (cx - x, cy - y);
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > radius { continue; }

            let target = match config.falloff {
                FalloffMode::TwoZone => two_zone_target(distance, radius, cs),
                _ => linear_target(distance, radius),
            };

            // Paint-additive: a stroke may darken a cell, never lighten it.
            if target > grid.intensity(i, j) {
                grid.set(i, j, target);
                updates.push(CellUpdate { row: i, col: j, intensity: target });
            }
        }
    }
    updates
}

#[inline]
fn linear_target(distance: f32, radius: f32) -> f32 {
    1.0 - distance / radius
}

fn two_zone_target(distance: f32, radius: f32, cell_size: f32) -> f32 {
    let inner = (radius - cell_size).max(0.0);
    if distance <= inner {
        return 1.0;
    }
    let ring = radius - inner;
    if ring <= 0.0 {
        return 1.0;
    }
    1.0 - (distance - inner) / ring
}

/// Binary mode: blacken exactly the cell under the pointer.
fn toggle_cell(grid: &mut Grid, config: &BrushConfig, x: f32, y: f32) -> Option<CellUpdate> {
    let cs = config.cell_size as f32;
    let col = (x / cs).floor();
    let row = (y / cs).floor();
    if !(row >= 0.0 && col >= 0.0) {
        return None; // also rejects NaN
    }
    let (row, col) = (row as usize, col as usize);
    if !grid.in_bounds(row, col) {
        return None;
    }
    grid.set(row, col, 1.0);
    Some(CellUpdate { row, col, intensity: 1.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(radius: f32, falloff: FalloffMode) -> BrushConfig {
        BrushConfig::new(20, radius, falloff).unwrap()
    }

    fn find(updates: &[CellUpdate], row: usize, col: usize) -> Option<f32> {
        updates.iter().find(|u| u.row == row && u.col == col).map(|u| u.intensity)
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(matches!(BrushConfig::new(0, 1.0, FalloffMode::Linear), Err(Error::InvalidConfig(_))));
        assert!(matches!(BrushConfig::new(20, 0.0, FalloffMode::Linear), Err(Error::InvalidConfig(_))));
        assert!(matches!(BrushConfig::new(20, -1.0, FalloffMode::TwoZone), Err(Error::InvalidConfig(_))));
        assert!(matches!(BrushConfig::new(20, f32::NAN, FalloffMode::None), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn bounding_box_follows_the_slack_formula() {
        let grid = Grid::new(30, 30).unwrap();
        let cfg = config(3.5, FalloffMode::Linear);

        // floor(5 - 4.5) = 0, ceil(5 + 4.5) = 10
        let (rows, cols) = bounding_box(&grid, &cfg, 100.0, 100.0).unwrap();
        assert_eq!(rows, 0..=10);
        assert_eq!(cols, 0..=10);

        // clamped at the far edge
        let (rows, _) = bounding_box(&grid, &cfg, 100.0, 590.0).unwrap();
        assert_eq!(rows, 25..=29);
    }

    #[test]
    fn bounding_box_is_empty_far_off_canvas() {
        let grid = Grid::new(30, 30).unwrap();
        let cfg = config(1.0, FalloffMode::Linear);
        assert!(bounding_box(&grid, &cfg, -500.0, 100.0).is_none());
        assert!(bounding_box(&grid, &cfg, 100.0, 5000.0).is_none());
        assert!(bounding_box(&grid, &cfg, f32::NAN, 100.0).is_none());
    }

    #[test]
    fn linear_dab_at_grid_intersection() {
        let mut grid = Grid::new(30, 30).unwrap();
        let cfg = config(3.5, FalloffMode::Linear);

        let updates = apply_brush(&mut grid, &cfg, 100.0, 100.0);

        // center (110,110) is sqrt(200) away from the pointer
        let expected = 1.0 - 200f32.sqrt() / 70.0;
        let got = find(&updates, 5, 5).unwrap();
        assert!((got - expected).abs() < 1e-5);
        assert!((got - 0.798).abs() < 1e-3);
        assert_eq!(grid.intensity(5, 5), got);

        assert!(updates.iter().all(|u| u.row <= 8 && u.col <= 8));
    }

    #[test]
    fn linear_rim_is_exact() {
        let mut grid = Grid::new(30, 30).unwrap();
        let cfg = config(2.0, FalloffMode::Linear); // 40 px

        // pointer on the center of (5,5); (5,7) sits exactly 40 px away
        let updates = apply_brush(&mut grid, &cfg, 110.0, 110.0);
        assert_eq!(find(&updates, 5, 5), Some(1.0));
        assert_eq!(find(&updates, 5, 6), Some(0.5));
        assert_eq!(find(&updates, 5, 7), None);
        assert_eq!(find(&updates, 5, 8), None);
        assert_eq!(grid.intensity(5, 7), 0.0);

        // nudged a hair toward (5,7): now strictly inside, gets a faint tint
        let mut grid = Grid::new(30, 30).unwrap();
        let updates = apply_brush(&mut grid, &cfg, 110.001, 110.0);
        let faint = find(&updates, 5, 7).unwrap();
        assert!(faint > 0.0 && faint < 1e-3);
    }

    #[test]
    fn two_zone_has_a_flat_core_and_one_cell_ring() {
        let mut grid = Grid::new(30, 30).unwrap();
        let cfg = config(2.0, FalloffMode::TwoZone); // 40 px radius, 20 px core

        let updates = apply_brush(&mut grid, &cfg, 110.0, 110.0);

        assert_eq!(find(&updates, 5, 5), Some(1.0));
        assert_eq!(find(&updates, 5, 6), Some(1.0)); // exactly on the core edge
        let diag = find(&updates, 6, 6).unwrap(); // 28.28 px out
        assert!((diag - (1.0 - (800f32.sqrt() - 20.0) / 20.0)).abs() < 1e-5);
        assert_eq!(find(&updates, 5, 7), None); // rim
    }

    #[test]
    fn two_zone_small_brush_is_a_plain_ramp() {
        let mut grid = Grid::new(10, 10).unwrap();
        let cfg = config(0.5, FalloffMode::TwoZone); // radius 10 px < one cell, no core

        let updates = apply_brush(&mut grid, &cfg, 115.0, 110.0);
        assert_eq!(updates.len(), 1);
        assert_eq!(find(&updates, 5, 5), Some(0.5));
    }

    #[test]
    fn two_zone_zero_width_ring_is_solid() {
        assert_eq!(two_zone_target(5.0, 10.0, 0.0), 1.0);
        assert_eq!(two_zone_target(10.0, 10.0, 0.0), 1.0);
    }

    #[test]
    fn blend_never_lightens() {
        let mut grid = Grid::new(30, 30).unwrap();
        let cfg = config(2.0, FalloffMode::Linear);

        apply_brush(&mut grid, &cfg, 110.0, 110.0);
        let before = grid.clone();
        // a second dab one cell over: shared cells keep the darker value
        apply_brush(&mut grid, &cfg, 130.0, 110.0);

        for (a, b) in before.as_slice().iter().zip(grid.as_slice()) {
            assert!(b >= a);
        }
        assert_eq!(grid.intensity(5, 5), 1.0);
    }

    #[test]
    fn toggle_hits_exactly_one_cell() {
        let mut grid = Grid::new(30, 30).unwrap();
        let cfg = config(3.5, FalloffMode::None);

        let updates = apply_brush(&mut grid, &cfg, 25.0, 25.0);
        assert_eq!(updates, vec![CellUpdate { row: 1, col: 1, intensity: 1.0 }]);
        assert_eq!(grid.as_slice().iter().filter(|&&v| v > 0.0).count(), 1);

        // re-toggling still reports the cell
        let again = apply_brush(&mut grid, &cfg, 39.0, 21.0);
        assert_eq!(again, updates);
    }

    #[test]
    fn toggle_ignores_pointers_off_canvas() {
        let mut grid = Grid::new(30, 30).unwrap();
        let cfg = config(1.0, FalloffMode::None);

        assert!(apply_brush(&mut grid, &cfg, -1.0, 10.0).is_empty());
        assert!(apply_brush(&mut grid, &cfg, 10.0, 600.0).is_empty());
        assert!(apply_brush(&mut grid, &cfg, 600.0, 10.0).is_empty());
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }
}
