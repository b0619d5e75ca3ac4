//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a serializable value as compact (`json`) or indented (`pretty`) JSON.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_output_json_is_compact() {
        let value = serde_json::json!({"frequency": "DAILY", "interval": 1});
        assert_eq!(
            format_output(&value, OutputFormat::Json),
            r#"{"frequency":"DAILY","interval":1}"#
        );
    }

    #[test]
    fn test_format_output_pretty_is_indented() {
        let value = serde_json::json!({"interval": 1});
        assert_eq!(
            format_output(&value, OutputFormat::Pretty),
            "{\n  \"interval\": 1\n}"
        );
    }
}
