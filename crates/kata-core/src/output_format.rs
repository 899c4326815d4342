//! Output format for CLI results.
//!
//! `Human` prints bare values, one per line. `Json` prints one complete
//! JSON object per line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How command results are rendered.
///
/// # Examples
///
/// ```
/// use kata_core::OutputFormat;
///
/// let format = OutputFormat::from_json_flag(true);
/// assert!(format.is_json());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text for terminals
    #[default]
    Human,
    /// JSON Lines for machine consumption
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Map the `--json` flag onto a format.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidConfig(format!(
                "Invalid output format: {s}. Must be one of: human, json"
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}
