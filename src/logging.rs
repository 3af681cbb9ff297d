//! `log` backend for the simulator.
//!
//! Records go to stderr as `LEVEL target: message` and are mirrored into the
//! [`DebugLog`] ring buffer shown on the debug page.

use std::sync::{Mutex, PoisonError};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use thermolab_common::profiling::DebugLog;

/// Lines shown by the debug page's log terminal.
static DEBUG_LOG: Mutex<DebugLog> = Mutex::new(DebugLog::new());

static LOGGER: SimLogger = SimLogger;

struct SimLogger;

impl Log for SimLogger {
    fn enabled(
        &self,
        metadata: &Metadata<'_>,
    ) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(
        &self,
        record: &Record<'_>,
    ) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        mirror(&mut DEBUG_LOG.lock().unwrap_or_else(PoisonError::into_inner), record);
    }

    fn flush(&self) {}
}

fn mirror(
    buf: &mut DebugLog,
    record: &Record<'_>,
) {
    buf.push_fmt(record.level(), *record.args());
}

/// Install the logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Run `f` with the on-screen log buffer locked.
pub fn with_debug_log<R>(f: impl FnOnce(&DebugLog) -> R) -> R {
    let log = DEBUG_LOG.lock().unwrap_or_else(PoisonError::into_inner);
    f(&log)
}
