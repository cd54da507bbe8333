use chrono::Local;

use crate::{config::SEQLOG_CONFIG, record::Severity};

/// Builds the single-line record text: `<timestamp> <SEVERITY> <scope> - <message>`.
pub(crate) fn format_record(severity: Severity, scope: &str, message: &str) -> String {
    let time = Local::now().format(&SEQLOG_CONFIG.TIMESTAMP_FORMAT);
    format!("{time} {severity} {scope} - {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_format_shape() {
        let line = format_record(Severity::Warning, "net", "link down");
        let (head, message) = line.split_once(" - ").unwrap();
        assert_eq!(message, "link down");
        assert!(head.ends_with("WARNING net"), "unexpected head: {head}");
    }

    #[test]
    fn test_timestamp_reparses_under_configured_format() {
        let line = format_record(Severity::Info, "clock", "tick");
        let fields: Vec<&str> = line.split_whitespace().collect();
        let timestamp = format!("{} {}", fields[0], fields[1]);
        NaiveDateTime::parse_from_str(&timestamp, &SEQLOG_CONFIG.TIMESTAMP_FORMAT)
            .unwrap_or_else(|e| panic!("timestamp `{timestamp}` does not reparse: {e}"));
    }

    #[test]
    fn test_empty_message_keeps_separator() {
        let line = format_record(Severity::Error, "net", "");
        let (_, message) = line.split_once(" - ").unwrap();
        assert_eq!(message, "");
    }
}
