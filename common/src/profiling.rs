//! On-screen log terminal.
//!
//! [`DebugLog`] keeps the most recent log lines for the debug page. The
//! simulator's logger mirrors every `log` record into it; timing metrics live
//! in the simulator because they need `std::time`.

use core::fmt::{self, Write};

use heapless::{Deque, String};
use log::Level;

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines kept for the terminal.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of the last [`LOG_BUFFER_SIZE`] log lines.
#[derive(Clone)]
pub struct DebugLog {
    buffer: Deque<(Level, LogLine), LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Append a line, dropping the oldest when full. Long lines are cut.
    pub fn push(
        &mut self,
        level: Level,
        msg: &str,
    ) {
        self.push_fmt(level, format_args!("{msg}"));
    }

    /// Append formatted arguments without an intermediate allocation.
    pub fn push_fmt(
        &mut self,
        level: Level,
        args: fmt::Arguments<'_>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        let mut line = Truncating(LogLine::new());
        let _ = line.write_fmt(args);
        self.buffer.push_back((level, line.0)).ok();
    }

    /// Lines with their level, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &str)> {
        self.buffer.iter().map(|(level, line)| (*level, line.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// Writer that silently drops characters once the line is full.
struct Truncating(LogLine);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.len() + c.len_utf8() > LOG_LINE_LENGTH {
                break;
            }
            self.0.push(c).ok();
        }
        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Append `val` as zero-padded two-digit decimal.
pub fn push_two_digits<const N: usize>(
    s: &mut String<N>,
    val: u64,
) {
    let _ = write!(s, "{val:02}");
}

/// Format a duration in whole seconds as `HH:MM:SS`.
pub fn hms(total_secs: u64) -> String<12> {
    let mut s = String::new();
    push_two_digits(&mut s, total_secs / 3600);
    s.push(':').ok();
    push_two_digits(&mut s, (total_secs % 3600) / 60);
    s.push(':').ok();
    push_two_digits(&mut s, total_secs % 60);
    s
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.push(Level::Info, "power on at 24.0 C");
        assert_eq!(log.len(), 1);

        log.push(Level::Warn, "overheat");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().last(), Some((Level::Warn, "overheat")));
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();
        for i in 0..LOG_BUFFER_SIZE {
            log.push_fmt(Level::Info, format_args!("{i}"));
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        // One more drops the oldest
        log.push(Level::Info, "new");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);
        assert_eq!(log.iter().next().map(|(_, line)| line), Some("1"));
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push(Level::Debug, "This is a very long message that exceeds the maximum line length limit");

        let (_, stored) = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(stored.starts_with("This is a very long"));
    }

    /// Exactly [`LOG_LINE_LENGTH`] characters.
    const FULL_LINE: &str = "012345678901234567890123456789012345678901234567";

    #[test]
    fn test_debug_log_keeps_full_length_line() {
        assert_eq!(FULL_LINE.len(), LOG_LINE_LENGTH);
        let mut log = DebugLog::new();
        log.push(Level::Info, FULL_LINE);

        let (_, stored) = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH, "a line of exactly the limit is stored whole");
    }

    #[test]
    fn test_debug_log_truncates_one_past_limit() {
        let mut log = DebugLog::new();
        log.push_fmt(Level::Warn, format_args!("{FULL_LINE}z"));

        let (_, stored) = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(!stored.contains('z'), "the overflowing character is dropped");
    }

    #[test]
    fn test_hms() {
        assert_eq!(hms(0).as_str(), "00:00:00");
        assert_eq!(hms(59).as_str(), "00:00:59");
        assert_eq!(hms(3_661).as_str(), "01:01:01");
        assert_eq!(hms(36_000).as_str(), "10:00:00");
    }
}
