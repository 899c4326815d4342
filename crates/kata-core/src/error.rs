//! Error types for kata-core
//!
//! - **Domain errors**: inputs outside an operation's defined domain (exit code 1)
//! - **Input / config errors**: unparseable arguments, bad configuration (exit code 1)
//! - **System errors**: IO while reading config or suite files (exit code 2)

use thiserror::Error;

/// Core error type for kata operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Factorial is only defined for non-negative integers
    #[error("Factorial is undefined for negative input: {n}")]
    NegativeFactorial { n: i64 },

    /// The operation needs at least one element
    #[error("{operation} requires a non-empty sequence")]
    EmptySequence { operation: &'static str },

    /// The result does not fit the output type
    #[error("{operation} overflowed: {detail}")]
    Overflow {
        operation: &'static str,
        detail: String,
    },

    /// An argument could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed TOML or JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// File could not be read
    #[error("IO error: {0}")]
    IoError(String),
}

impl Error {
    /// Stable identifier for machine-readable output and error expectations.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NegativeFactorial { .. } => "negative_factorial",
            Self::EmptySequence { .. } => "empty_sequence",
            Self::Overflow { .. } => "overflow",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidConfig(_) => "invalid_config",
            Self::ParseError(_) => "parse_error",
            Self::IoError(_) => "io_error",
        }
    }

    /// Returns the process exit code for this error.
    ///
    /// - 1: user error (undefined domain, bad input, bad configuration)
    /// - 2: system error (IO)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::IoError(_) => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

/// Result type alias for kata-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_factorial_display() {
        let err = Error::NegativeFactorial { n: -3 };
        assert_eq!(
            err.to_string(),
            "Factorial is undefined for negative input: -3"
        );
    }

    #[test]
    fn test_empty_sequence_display() {
        let err = Error::EmptySequence {
            operation: "find_max",
        };
        assert_eq!(err.to_string(), "find_max requires a non-empty sequence");
    }

    #[test]
    fn test_codes_are_snake_case() {
        let errors = [
            Error::NegativeFactorial { n: -1 },
            Error::EmptySequence { operation: "x" },
            Error::Overflow {
                operation: "x",
                detail: String::new(),
            },
            Error::InvalidInput(String::new()),
            Error::InvalidConfig(String::new()),
            Error::ParseError(String::new()),
            Error::IoError(String::new()),
        ];

        for err in errors {
            let code = err.code();
            assert!(
                code.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "unexpected code {code}"
            );
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::NegativeFactorial { n: -1 }.exit_code(), 1);
        assert_eq!(Error::InvalidConfig("bad".into()).exit_code(), 1);
        assert_eq!(Error::IoError("missing".into()).exit_code(), 2);
    }

    #[test]
    fn test_from_toml_error_is_parse_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("x = [");
        let err = parsed.map_err(Error::from);
        assert!(matches!(err, Err(Error::ParseError(_))));
    }
}
