//! Structured error types for the mockup layout crate.
//!
//! The two engine functions never fail. Errors only come from the
//! surfaces around them: JSON parsing, canvas/option validation done on
//! behalf of callers, and CLI file I/O.

use thiserror::Error;

/// The unified error type returned by the fallible public API.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// JSON input failed to parse as a screen or layout options.
    #[error("Failed to parse input: {source}{}", format_hint(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// Canvas dimensions must both be positive.
    #[error("Invalid screen: {width}x{height} (width and height must be positive)")]
    InvalidScreen { width: i64, height: i64 },
    /// Layout options the engine cannot act on (e.g. zero grid columns).
    #[error("Invalid layout options: {0}")]
    InvalidOptions(String),
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the screen schema. Check field names and types (x, y, width, height are integers).".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        LayoutError::ParseError { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_carries_hint() {
        let err: LayoutError = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse input"));
        assert!(msg.contains("trailing commas"));
    }

    #[test]
    fn test_invalid_screen_message() {
        let err = LayoutError::InvalidScreen {
            width: 0,
            height: 852,
        };
        assert_eq!(
            err.to_string(),
            "Invalid screen: 0x852 (width and height must be positive)"
        );
    }
}
