use std::fmt;

use colored::Color;

/// Category label attached to a log call. Determines the record prefix and
/// the console color used when mirroring is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
    FinalInfo,
    CancelInfo,
}

/// Console color per severity. Severities without an entry print unstyled.
const CONSOLE_COLORS: &[(Severity, Color)] = &[
    (Severity::Info, Color::Cyan),
    (Severity::Warning, Color::Yellow),
    (Severity::Error, Color::Red),
];

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
        Severity::FinalInfo,
        Severity::CancelInfo,
    ];

    /// Token written into every record; single-word so lines stay parseable.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::FinalInfo => "FINAL_INFO",
            Severity::CancelInfo => "CANCEL_INFO",
        }
    }

    pub fn console_color(self) -> Option<Color> {
        CONSOLE_COLORS
            .iter()
            .find(|(severity, _)| *severity == self)
            .map(|(_, color)| *color)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The formatted text plus severity produced by one logging call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The full line as written to the file, without the trailing newline.
    pub message: String,
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_single_tokens() {
        for severity in Severity::ALL {
            assert!(
                !severity.label().contains(char::is_whitespace),
                "label `{}` would split a record head",
                severity.label()
            );
        }
        assert_eq!(Severity::Warning.label(), "WARNING");
        assert_eq!(Severity::FinalInfo.label(), "FINAL_INFO");
        assert_eq!(Severity::CancelInfo.label(), "CANCEL_INFO");
    }

    #[test]
    fn test_console_color_table() {
        assert_eq!(Severity::Info.console_color(), Some(Color::Cyan));
        assert_eq!(Severity::Warning.console_color(), Some(Color::Yellow));
        assert_eq!(Severity::Error.console_color(), Some(Color::Red));
        assert_eq!(Severity::Fatal.console_color(), None);
        assert_eq!(Severity::FinalInfo.console_color(), None);
        assert_eq!(Severity::CancelInfo.console_color(), None);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }
}
