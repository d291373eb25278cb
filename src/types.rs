// Core types shared by the rasterizer, the session and the window.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the canvas is on screen (pixels)
    pub height: usize,     // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer filled with one color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }
}

/// Pointer position in canvas pixels (origin top-left, x right, y down).
/// Produced on mouse-down and on every drag sample while the button is held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One cell whose intensity changed; the renderer repaints exactly this cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellUpdate {
    pub row: usize,
    pub col: usize,
    pub intensity: f32, // 0.0 = white, 1.0 = black
}
