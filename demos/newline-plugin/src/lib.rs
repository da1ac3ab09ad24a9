//! Newline Plugin - A minimal formatter plugin example
//!
//! Normalises line endings, strips trailing whitespace and ends every file
//! with exactly one newline. With `extraRules` it also collapses runs of
//! blank lines.
//!
//! Build with `cargo build --release --target wasm32-unknown-unknown`.

use fmt_plugin_sdk::prelude::*;
use std::str::Utf8Error;

pub struct NewlinePlugin;

/// Whitespace normaliser
pub struct WhitespaceFormatter;

impl Formatter for WhitespaceFormatter {
    type Error = Utf8Error;

    fn format(&self, input: &[u8], options: &FormatOptions) -> Result<Vec<u8>, Utf8Error> {
        let text = std::str::from_utf8(input)?;
        let mut out = String::with_capacity(text.len() + 1);
        let mut previous_blank = false;

        for line in text.lines() {
            let line = line.trim_end();
            if options.extra_rules && line.is_empty() && previous_blank {
                continue;
            }
            previous_blank = line.is_empty();
            out.push_str(line);
            out.push('\n');
        }

        // Trailing blank lines collapse into the final newline
        while out.ends_with("\n\n") {
            out.pop();
        }
        Ok(out.into_bytes())
    }
}

impl Plugin for NewlinePlugin {
    type Formatter = WhitespaceFormatter;

    fn info() -> PluginInfo {
        PluginInfo::new("fmt-plugin-newline", env!("CARGO_PKG_VERSION"), "newline")
            .extension("txt")
            .extension("md")
            .help_url("https://github.com/ynishi/fmt-plugin-rs")
    }

    fn license_text() -> &'static str {
        include_str!("../LICENSE")
    }

    fn formatter() -> WhitespaceFormatter {
        WhitespaceFormatter
    }
}

export_plugin!(NewlinePlugin);

#[cfg(test)]
mod tests {
    use super::*;

    fn format(input: &str, extra_rules: bool) -> String {
        let options = FormatOptions {
            extra_rules,
            ..FormatOptions::default()
        };
        String::from_utf8(WhitespaceFormatter.format(input.as_bytes(), &options).unwrap()).unwrap()
    }

    #[test]
    fn test_trailing_whitespace_removed() {
        assert_eq!(format("a  \r\nb\t", false), "a\nb\n");
    }

    #[test]
    fn test_formatted_input_unchanged() {
        assert_eq!(format("a\n\n\nb\n", false), "a\n\n\nb\n");
    }

    #[test]
    fn test_extra_rules_collapse_blank_lines() {
        assert_eq!(format("a\n\n\n\nb\n\n\n", true), "a\n\nb\n");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let result = WhitespaceFormatter.format(&[0xff, 0xfe], &FormatOptions::default());
        assert!(result.is_err());
    }
}
