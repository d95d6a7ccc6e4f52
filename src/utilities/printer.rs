//! Console printer with color support.
//!
//! Trace output normally goes to stdout. Tests swap in a capture
//! buffer via [`Printer::captured`] so they can assert on, or simply
//! silence, what a light reports.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Available colors for printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterColor {
    Red,
    Green,
    Yellow,
    BoldRed,
    BoldGreen,
    BoldYellow,
}

impl PrinterColor {
    /// ANSI escape code for this color.
    fn ansi_code(&self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::BoldRed => "\x1b[1;31m",
            Self::BoldGreen => "\x1b[1;32m",
            Self::BoldYellow => "\x1b[1;33m",
        }
    }
}

/// ANSI reset code.
const RESET: &str = "\x1b[0m";

/// Shared buffer a capturing printer appends to.
pub type CaptureBuffer = Arc<Mutex<Vec<String>>>;

/// Printer for console output with color support.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    /// When set, lines are recorded here (uncolored) instead of printed.
    capture: Option<CaptureBuffer>,
}

impl Printer {
    /// Create a printer that writes to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a printer that records lines into a shared buffer
    /// instead of printing them, along with the buffer itself.
    pub fn captured() -> (Self, CaptureBuffer) {
        let buffer: CaptureBuffer = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                capture: Some(Arc::clone(&buffer)),
            },
            buffer,
        )
    }

    /// Print a message with the specified color.
    pub fn print(&self, content: &str, color: PrinterColor) {
        match &self.capture {
            Some(buffer) => buffer.lock().push(content.to_string()),
            None => println!("{}{}{}", color.ansi_code(), content, RESET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_printer_records_lines() {
        let (printer, buffer) = Printer::captured();
        printer.print("stop", PrinterColor::Red);
        printer.print("go", PrinterColor::Green);
        assert_eq!(*buffer.lock(), vec!["stop", "go"]);
    }

    #[test]
    fn test_capture_does_not_include_ansi_codes() {
        let (printer, buffer) = Printer::captured();
        printer.print("plain", PrinterColor::BoldYellow);
        assert_eq!(buffer.lock()[0], "plain");
    }
}
