use chrono::{DateTime, Utc};

/// Render a goal timestamp for display. Unparseable values are shown verbatim,
/// missing ones as "Unknown".
pub fn display_timestamp(parsed: Option<DateTime<Utc>>, raw: &str) -> String {
    match parsed {
        Some(timestamp) => timestamp.format("%b %d, %Y").to_string(),
        None if raw.trim().is_empty() => "Unknown".to_string(),
        None => raw.to_string(),
    }
}

pub fn format_percent(value: impl std::fmt::Display) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_parsed_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();

        assert_eq!(display_timestamp(Some(timestamp), "ignored"), "Mar 09, 2024");
    }

    #[test]
    fn test_display_raw_fallback() {
        assert_eq!(display_timestamp(None, "last week"), "last week");
        assert_eq!(display_timestamp(None, "  "), "Unknown");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(40), "40%");
        assert_eq!(format_percent(-5), "-5%");
    }
}
