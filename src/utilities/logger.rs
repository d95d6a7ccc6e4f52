//! Diagnostic logger for the traffic light.
//!
//! Phase toggles are traced through this collaborator rather than
//! written straight to stdout, so embedding code can silence them
//! (non-verbose) or capture them (a capturing [`Printer`]).

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::utilities::printer::{Printer, PrinterColor};

/// Logger with optional verbose output and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    /// Enables verbose logging with timestamps.
    pub verbose: bool,
    /// Default color for log messages.
    #[serde(default = "default_color")]
    pub default_color: PrinterColor,
    /// Output printer (not serialized).
    #[serde(skip)]
    printer: Printer,
}

fn default_color() -> PrinterColor {
    PrinterColor::Yellow
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            verbose: false,
            default_color: PrinterColor::Yellow,
            printer: Printer::default(),
        }
    }
}

impl Logger {
    /// Create a new `Logger` printing to stdout.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Create a `Logger` that writes through the given printer.
    pub fn with_printer(verbose: bool, printer: Printer) -> Self {
        Self {
            verbose,
            default_color: default_color(),
            printer,
        }
    }

    /// Log a message with a timestamp if verbose mode is enabled.
    ///
    /// # Arguments
    /// * `level` - The log level (e.g., "info", "warning", "error").
    /// * `message` - The message to log.
    /// * `color` - Optional color override for the message.
    pub fn log(&self, level: &str, message: &str, color: Option<PrinterColor>) {
        if self.verbose {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let color = color.unwrap_or(self.default_color);
            let formatted = format!("[{}][{}]: {}", timestamp, level.to_uppercase(), message);
            self.printer.print(&formatted, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_logger_writes_through_printer() {
        let (printer, buffer) = Printer::captured();
        let logger = Logger::with_printer(true, printer);
        logger.log("info", "light is green", None);

        let lines = buffer.lock();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[INFO]"));
        assert!(lines[0].contains("light is green"));
    }

    #[test]
    fn test_quiet_logger_stays_silent() {
        let (printer, buffer) = Printer::captured();
        let logger = Logger::with_printer(false, printer);
        logger.log("info", "nobody hears this", None);
        assert!(buffer.lock().is_empty());
    }
}
