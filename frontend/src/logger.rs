//! `log` records go to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = record.args().to_string();
        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            _ => gloo_console::info!(line),
        }
    }

    fn flush(&self) {}
}

pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Info))
}
