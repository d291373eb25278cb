use log::{LevelFilter, Log};
use pixel_brush::logger;

#[test]
fn session_logger_installs_once() {
    let path = logger::init(LevelFilter::Info);
    assert_eq!(log::max_level(), LevelFilter::Info);
    log::info!("logger smoke line");

    if let Some(path) = path {
        assert!(path.ends_with("pixel-brush/pixel-brush.log"));
        log::logger().flush();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[INFO] logger smoke line"));
    }

    // a second install is refused and leaves the first one in place
    let _ = logger::init(LevelFilter::Debug);
    assert_eq!(log::max_level(), LevelFilter::Info);
}
