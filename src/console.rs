//! Console Logger
//!
//! Routes `log` records to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => leptos::logging::error!("{}", record.args()),
            Level::Warn => leptos::logging::warn!("{}", record.args()),
            _ => leptos::logging::log!("{}", record.args()),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; later calls only adjust the level
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_respects_max_level() {
        init(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("Filter").build();
        let debug = Metadata::builder().level(Level::Debug).target("Filter").build();
        assert!(LOGGER.enabled(&warn));
        assert!(!LOGGER.enabled(&debug));

        init(LevelFilter::Debug);
        assert!(LOGGER.enabled(&debug));
    }
}
