//! Kernel logger behind the `log` facade.
//!
//! Records go to a console sink installed once by [`init`]. The level is
//! picked at build time from the `LOG` environment variable.

use crate::config::DEFAULT_LOG_LEVEL;
use core::fmt;
use lazy_static::*;
use log::{LevelFilter, Log, Metadata, Record};
use spin::Once;

pub type Sink = fn(fmt::Arguments);

static SINK: Once<Sink> = Once::new();
static LOGGER: SimpleLogger = SimpleLogger;

lazy_static! {
    static ref LOG_LEVEL: LevelFilter = level_from_env(option_env!("LOG"));
}

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= *LOG_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(sink) = SINK.get() {
            sink(format_args!("[{:>5}] {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

fn level_from_env(level: Option<&str>) -> LevelFilter {
    match level {
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        _ => DEFAULT_LOG_LEVEL.to_level_filter(),
    }
}

/// Installs the logger. Only the first call has any effect.
pub fn init(sink: Sink) {
    SINK.call_once(|| sink);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(*LOG_LEVEL);
    }
}
