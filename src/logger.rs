//! Session logger behind the `log` facade.
//!
//! Records go to stderr and to `pixel-brush/pixel-brush.log` under the user's
//! data directory (`%APPDATA%`, `$XDG_DATA_HOME` or `~/.local/share`).
//! The file is truncated at each launch so it only holds the latest session.
//! Lines are stamped with the time since the logger was installed.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

struct SessionLogger {
    started: Instant,
    file: Option<Mutex<File>>,
}

impl Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] [{}] {}", elapsed(self.started), record.level(), record.args());
        eprintln!("{line}");
        // Logging must never take the app down: I/O errors are dropped.
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = writeln!(file, "{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = file.flush();
        }
    }
}

/// Install the logger. Call once, before anything logs.
/// Returns the log file path when the file could be opened.
pub fn init(level: LevelFilter) -> Option<PathBuf> {
    let path = log_file_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let file = OpenOptions::new().create(true).write(true).truncate(true).open(&path);
    let (file, opened) = match file {
        Ok(f) => (Some(Mutex::new(f)), Some(path)),
        Err(e) => {
            // Can't open the log file: stderr still works
            eprintln!("[logger] Failed to open log file {:?}: {}", path, e);
            (None, None)
        }
    };

    let logger = SessionLogger { started: Instant::now(), file };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
        install_panic_hook();
    }
    opened
}

/// Mirror panics into the log before the default handler prints them.
fn install_panic_hook() {
    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("PANIC: {info}");
        log::logger().flush();
        prev(info);
    }));
}

fn log_file_path() -> PathBuf {
    data_dir().join("pixel-brush").join("pixel-brush.log")
}

/// First of %APPDATA%, $XDG_DATA_HOME, ~/.local/share; else the working dir.
fn data_dir() -> PathBuf {
    let env = |key: &str| std::env::var_os(key).map(PathBuf::from);
    env("APPDATA")
        .or_else(|| env("XDG_DATA_HOME"))
        .or_else(|| env("HOME").map(|home| home.join(".local").join("share")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `SSSS.mmm` seconds since `started`.
fn elapsed(started: Instant) -> String {
    let d = started.elapsed();
    format!("{:>4}.{:03}", d.as_secs(), d.subsec_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_seconds_and_millis() {
        let stamp = elapsed(Instant::now());
        let (secs, millis) = stamp.trim().split_once('.').unwrap();
        assert_eq!(secs, "0");
        assert_eq!(millis.len(), 3);
    }

    #[test]
    fn log_file_lives_in_an_app_folder() {
        let path = log_file_path();
        assert!(path.ends_with("pixel-brush/pixel-brush.log"));
    }
}
