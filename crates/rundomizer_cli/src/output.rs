//! Output rendering for generator results.

use std::fmt;
use std::str::FromStr;

use rundomizer_core::generators::ShareText;
use serde::Serialize;

use crate::Result;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable share text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown format: {}. Supported: text, json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Renders a generator result in the requested format.
pub fn render<T: Serialize + ShareText>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(value.share_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Fixed {
        value: i64,
    }

    impl ShareText for Fixed {
        fn share_text(&self) -> String {
            format!("Случайное число: {}", self.value)
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text_and_json() {
        let value = Fixed { value: 42 };
        assert_eq!(
            render(&value, OutputFormat::Text).unwrap(),
            "Случайное число: 42"
        );

        let json: serde_json::Value =
            serde_json::from_str(&render(&value, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["value"], 42);
    }
}
