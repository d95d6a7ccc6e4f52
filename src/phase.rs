//! Traffic light phase type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two phases a traffic light cycles through.
///
/// The only legal transition is the toggle between them; a light never
/// skips from a phase back to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Traffic must stop.
    Red,
    /// Traffic may proceed.
    Green,
}

impl Phase {
    /// The phase the light switches to next.
    pub fn toggled(self) -> Phase {
        match self {
            Phase::Red => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }

    /// Encoding for storage in an atomic cell.
    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Phase::Red => 0,
            Phase::Green => 1,
        }
    }

    /// Decode the atomic cell encoding. Any non-zero value reads as green.
    pub(crate) fn from_u8(raw: u8) -> Phase {
        if raw == 0 {
            Phase::Red
        } else {
            Phase::Green
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Red => write!(f, "red"),
            Phase::Green => write!(f, "green"),
        }
    }
}

impl Default for Phase {
    /// A freshly constructed light starts red.
    fn default() -> Self {
        Phase::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(Phase::Red.toggled(), Phase::Green);
        assert_eq!(Phase::Green.toggled(), Phase::Red);
        assert_eq!(Phase::Red.toggled().toggled(), Phase::Red);
    }

    #[test]
    fn test_default_is_red() {
        assert_eq!(Phase::default(), Phase::Red);
    }

    #[test]
    fn test_atomic_encoding() {
        assert_eq!(Phase::from_u8(Phase::Red.as_u8()), Phase::Red);
        assert_eq!(Phase::from_u8(Phase::Green.as_u8()), Phase::Green);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Green).unwrap(), "\"green\"");
        assert_eq!(
            serde_json::from_str::<Phase>("\"red\"").unwrap(),
            Phase::Red
        );
    }
}
