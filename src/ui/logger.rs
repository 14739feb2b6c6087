//! `log` backend that prints through `ui::messages`.

use crate::ui::messages;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct MessageLogger;

static LOGGER: MessageLogger = MessageLogger;

impl Log for MessageLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => messages::error(record.args()),
            Level::Warn => messages::trace(format!("warning: {}", record.args())),
            _ => messages::trace(format!("[{}] {}", record.target(), record.args())),
        }
    }

    fn flush(&self) {}
}

/// Install the logger: `Debug` when verbose, `Warn` otherwise.
/// Calling it twice keeps the first logger and only updates the level.
pub fn init(verbose: bool) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
}
