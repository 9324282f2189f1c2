//! Beacon state types

use serde::{Deserialize, Serialize};

use crate::error::BeaconError;

/// Lit state of a beacon as seen in one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeaconState {
    /// Only the blue color is present
    Blue,
    /// Only the red color is present
    Red,
    /// Blue band left of the red band
    BlueRed,
    /// Red band left of the blue band
    RedBlue,
    /// Neither color reached the detection threshold
    Undetermined,
}

impl BeaconState {
    /// Every state, in label order
    pub const ALL: [BeaconState; 5] = [
        BeaconState::Blue,
        BeaconState::Red,
        BeaconState::BlueRed,
        BeaconState::RedBlue,
        BeaconState::Undetermined,
    ];

    /// Canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            BeaconState::Blue => "blue",
            BeaconState::Red => "red",
            BeaconState::BlueRed => "bluered",
            BeaconState::RedBlue => "redblue",
            BeaconState::Undetermined => "undetermined",
        }
    }
}

impl std::str::FromStr for BeaconState {
    type Err = BeaconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blue" => Ok(BeaconState::Blue),
            "red" => Ok(BeaconState::Red),
            "bluered" => Ok(BeaconState::BlueRed),
            "redblue" => Ok(BeaconState::RedBlue),
            "undetermined" => Ok(BeaconState::Undetermined),
            _ => Err(BeaconError::UnknownState(s.to_string())),
        }
    }
}

impl std::fmt::Display for BeaconState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for state in BeaconState::ALL {
            assert_eq!(state.to_string().parse::<BeaconState>().unwrap(), state);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BlueRed".parse::<BeaconState>().unwrap(), BeaconState::BlueRed);
        assert_eq!("RED".parse::<BeaconState>().unwrap(), BeaconState::Red);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "purple".parse::<BeaconState>().unwrap_err();
        assert!(matches!(err, BeaconError::UnknownState(ref s) if s == "purple"));
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&BeaconState::RedBlue).unwrap();
        assert_eq!(json, "\"redblue\"");

        let parsed: BeaconState = serde_json::from_str("\"undetermined\"").unwrap();
        assert_eq!(parsed, BeaconState::Undetermined);
    }
}
