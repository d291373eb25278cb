// Window + toolbar drawing.
// Visual effects provided here:
// 1) A window showing the cell grid with a button strip underneath.
// 2) SAVE / CLEAR buttons drawn with a tiny 5x7 bitmap font.
// 3) Notifications (saved / failed) shown in the window title.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub const TOOLBAR_HEIGHT: usize = 28;

const BUTTON_FACE: u32 = 0x00_E0_E0_E0;
const BUTTON_EDGE: u32 = 0x00_80_80_80;
const LABEL: u32 = 0x00_00_00_00;

/// What a toolbar click asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    Save,
    Clear,
}

/// The strip under the canvas: Save on the left half, Clear on the right.
pub struct Toolbar {
    frame: FrameBuffer,
    top: usize, // y of the strip in window pixels
}

impl Toolbar {
    pub fn new(width: usize, top: usize) -> Self {
        let mut toolbar = Self { frame: FrameBuffer::filled(width, TOOLBAR_HEIGHT, BUTTON_FACE), top };
        let half = width / 2;
        toolbar.draw_button(0, half, "SAVE");
        toolbar.draw_button(half, width - half, "CLEAR");
        toolbar
    }

    /// Which button (if any) sits under window pixel (x, y).
    pub fn hit(&self, x: f32, y: f32) -> Option<ToolbarAction> {
        let top = self.top as f32;
        let width = self.frame.width as f32;
        if !(x >= 0.0 && x < width && y >= top && y < top + TOOLBAR_HEIGHT as f32) {
            return None;
        }
        Some(if x < (self.frame.width / 2) as f32 { ToolbarAction::Save } else { ToolbarAction::Clear })
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    fn draw_button(&mut self, x0: usize, width: usize, label: &str) {
        let fb = &mut self.frame;
        for y in 0..TOOLBAR_HEIGHT {
            for x in x0..x0 + width {
                let edge = x == x0 || y == 0 || x == x0 + width - 1 || y == TOOLBAR_HEIGHT - 1;
                fb.pixels[y * fb.width + x] = if edge { BUTTON_EDGE } else { BUTTON_FACE };
            }
        }
        // center the label: 6 px per glyph incl. spacing, 7 px tall
        let text_w = label.len() as i32 * 6 - 1;
        let tx = x0 as i32 + (width as i32 - text_w) / 2;
        let ty = (TOOLBAR_HEIGHT as i32 - 7) / 2;
        draw_text_5x7(fb, tx, ty, label, LABEL);
    }
}

pub struct Drawer {
    window: Window,      // the on-screen window you see
    screen: FrameBuffer, // canvas on top, toolbar below
}

impl Drawer {
    /// Create a window big enough for the canvas plus the toolbar.
    pub fn new(title: &str, canvas_width: usize, canvas_height: usize) -> Result<Self, Error> {
        let height = canvas_height + TOOLBAR_HEIGHT;
        let mut window = Window::new(title, canvas_width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, screen: FrameBuffer::filled(canvas_width, height, 0) })
    }

    /// Stack canvas and toolbar and push them to the screen.
    pub fn present(&mut self, canvas: &FrameBuffer, toolbar: &FrameBuffer) -> Result<(), Error> {
        let split = canvas.pixels.len();
        self.screen.pixels[..split].copy_from_slice(&canvas.pixels);
        self.screen.pixels[split..split + toolbar.pixels.len()].copy_from_slice(&toolbar.pixels);
        self.window
            .update_with_buffer(&self.screen.pixels, self.screen.width, self.screen.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Mouse position in window pixels. Not clamped: a drag may leave the
    /// window and the brush copes with that.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Pass)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Visual: the title bar text changes (used for save notifications).
    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}

/* ---------- Software drawing: pixels and a tiny bitmap font ---------- */

#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    fb.pixels[y * fb.width + x] = color;
}

/// 5x7 glyphs for the button labels. Each u8 is a row; bit 4 = leftmost pixel.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        ' ' => [0; 7],
        _ => return None,
    };
    Some(rows)
}

/// Draw a text string; unknown characters leave a blank cell.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        if let Some(rows) = glyph5x7(ch.to_ascii_uppercase()) {
            for (ry, bits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if bits & (1 << (4 - rx)) != 0 {
                        put_pixel(fb, x + rx, y + ry as i32, color);
                    }
                }
            }
        }
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
