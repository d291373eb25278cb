// Turns polled mouse state into pointer events.
// The window is polled once per frame; a stroke is "press" (one event on the
// frame the button goes down) then "drag" (one event per frame the position moved).

use crate::types::PointerEvent;

#[derive(Default)]
pub struct PointerTracker {
    last: Option<(f32, f32)>, // Some while the button is held
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of mouse state; returns the event to paint, if any.
    pub fn sample(&mut self, button_down: bool, pos: Option<(f32, f32)>) -> Option<PointerEvent> {
        if !button_down {
            self.last = None; // release ends the stroke
            return None;
        }
        let pos = pos?;
        let pressed_now = self.last.is_none();
        let moved = self.last != Some(pos);
        self.last = Some(pos);

        (pressed_now || moved).then(|| PointerEvent::new(pos.0, pos.1))
    }
}
