use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;

/// "3 hours ago" rendering of a stored RFC 3339 timestamp; timestamps that
/// fail to parse are shown verbatim.
pub fn humanize(timestamp: &str) -> String {
    match timestamp.parse::<DateTime<Utc>>() {
        Ok(instant) => HumanTime::from(instant).to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_passes_through() {
        assert_eq!(humanize("yesterday-ish"), "yesterday-ish");
    }

    #[test]
    fn rfc3339_is_humanized() {
        let rendered = humanize("2001-01-01T00:00:00+00:00");
        assert!(rendered.ends_with("ago"));
    }
}
