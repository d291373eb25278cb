// What you SEE:
// • A white grid of square cells with SAVE / CLEAR buttons underneath.
// • Hold Left Mouse and drag: cells darken under the brush (toggle or soft falloff).
// • S or SAVE writes the pixel map; C or CLEAR wipes the grid. ESC quits.

use clap::Parser;
use log::LevelFilter;

use pixel_brush::config::{Args, SessionConfig};
use pixel_brush::draw::{Drawer, Toolbar, ToolbarAction};
use pixel_brush::input::PointerTracker;
use pixel_brush::surface::{render, Canvas};
use pixel_brush::{logger, Error, Session};

fn main() -> Result<(), Error> {
    let args = Args::parse();
    if let Some(path) = logger::init(LevelFilter::Info) {
        log::info!("log file: {}", path.display());
    }

    let config = SessionConfig::try_from(args)?;
    log::info!(
        "{}x{} grid, {} px cells, brush {:?} r={} cells, saving to {}",
        config.rows,
        config.cols,
        config.brush.cell_size(),
        config.brush.falloff(),
        config.brush.brush_radius(),
        config.output.display()
    );

    /* --- Grid, canvas, window ---
       Visual: window opens showing the (blank or loaded) grid. */
    let mut session = Session::new(config.clone())?;
    let mut canvas = Canvas::new(config.rows, config.cols, config.brush.cell_size());
    session.repaint_all(&mut canvas);

    let (w, h) = config.canvas_size();
    let title = format!("{}x{} Pixel Map Drawer", config.cols, config.rows);
    let mut drawer = Drawer::new(&title, w, h)?;
    let toolbar = Toolbar::new(w, h);

    let mut tracker = PointerTracker::new();
    let mut was_down = false;
    let mut stroke_on_toolbar = false; // a press on a button is a click, not paint

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let down = drawer.left_mouse_down();
        let pos = drawer.mouse_pos();

        // 1) Button clicks fire on the frame the button goes down.
        let mut action = None;
        if down && !was_down {
            action = pos.and_then(|(x, y)| toolbar.hit(x, y));
            stroke_on_toolbar = action.is_some();
        }
        if !down {
            stroke_on_toolbar = false;
        }
        was_down = down;

        if drawer.s_pressed_once() { action = Some(ToolbarAction::Save); }
        if drawer.c_pressed_once() { action = Some(ToolbarAction::Clear); }

        match action {
            Some(ToolbarAction::Save) => match session.save() {
                Ok(path) => drawer.set_title(&format!("{title} - saved to {}", path.display())),
                Err(e) => {
                    // not fatal: the grid is untouched, keep drawing
                    log::warn!("{e}");
                    drawer.set_title(&format!("{title} - {e}"));
                }
            },
            Some(ToolbarAction::Clear) => {
                let updates = session.clear();
                render(&updates, &mut canvas);
                drawer.set_title(&title);
            }
            None => {}
        }

        // 2) Paint: press + drag samples while the left button is held.
        let event = tracker.sample(down && !stroke_on_toolbar, pos);
        if let Some(event) = event {
            let updates = session.press_or_drag(event);
            render(&updates, &mut canvas);
        }

        /* 3) Present to the window. */
        drawer.present(canvas.frame(), toolbar.frame())?;
    }

    log::info!("session closed");
    Ok(())
}
