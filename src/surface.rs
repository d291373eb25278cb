// Where cell colors end up.
// The rasterizer only produces CellUpdates; anything implementing CellSurface
// can show them. Canvas is the software one the window displays.

use image::Rgb;

use crate::color::{intensity_to_color, to_argb};
use crate::types::{CellUpdate, FrameBuffer};

/// Tk's "gray" (#BEBEBE), the grid line color.
pub const OUTLINE: u32 = 0x00_BE_BE_BE;

/// An addressable grid of colored cells.
pub trait CellSurface {
    fn set_cell_color(&mut self, row: usize, col: usize, color: Rgb<u8>);
}

/// Repaint every updated cell, in the order given.
pub fn render<S: CellSurface + ?Sized>(updates: &[CellUpdate], surface: &mut S) {
    for u in updates {
        surface.set_cell_color(u.row, u.col, intensity_to_color(u.intensity));
    }
}

/// The grid drawn as `cell_size` squares with a 1-pixel outline.
/// Visual: a white sheet of graph paper when fresh.
pub struct Canvas {
    rows: usize,
    cols: usize,
    cell_size: usize,
    frame: FrameBuffer,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize, cell_size: usize) -> Self {
        let mut canvas = Self {
            rows,
            cols,
            cell_size,
            frame: FrameBuffer::filled(cols * cell_size, rows * cell_size, 0x00_FF_FF_FF),
        };
        for row in 0..rows {
            for col in 0..cols {
                canvas.set_cell_color(row, col, Rgb([255, 255, 255]));
            }
        }
        canvas
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Pixel color at (x, y), for checks.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.frame.pixels[y * self.frame.width + x]
    }
}

impl CellSurface for Canvas {
    fn set_cell_color(&mut self, row: usize, col: usize, color: Rgb<u8>) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let cs = self.cell_size;
        let (x0, y0) = (col * cs, row * cs);
        let fill = to_argb(color);

        for y in y0..y0 + cs {
            let ofs = y * self.frame.width;
            for x in x0..x0 + cs {
                let edge = x == x0 || y == y0 || x == x0 + cs - 1 || y == y0 + cs - 1;
                self.frame.pixels[ofs + x] = if edge { OUTLINE } else { fill };
            }
        }
    }
}
