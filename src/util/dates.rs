use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use regex::Regex;

use crate::model::card::Card;

const MONTHS_SV: [&str; 12] = [
    "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.", "dec.",
];

fn title_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date regex"))
}

/// The date a card is shown and sorted by.
///
/// A `YYYY-MM-DD` date written in the title wins (it is usually a delivery or
/// meeting date someone typed in). Without one, the creation time encoded in
/// the card id is used, then the last activity timestamp.
pub fn display_date(card: &Card) -> Option<DateTime<Utc>> {
    title_date(&card.name)
        .or_else(|| id_timestamp(&card.id))
        .or(card.date_last_activity)
}

/// First valid calendar date in the title, at UTC midnight.
pub fn title_date(title: &str) -> Option<DateTime<Utc>> {
    title_date_regex()
        .find_iter(title)
        .find_map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Trello ids start with 8 hex digits holding the creation time in seconds.
pub fn id_timestamp(id: &str) -> Option<DateTime<Utc>> {
    let prefix = id.get(..8)?;
    if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let secs = u32::from_str_radix(prefix, 16).ok()?;
    DateTime::from_timestamp_millis(i64::from(secs) * 1000)
}

/// Swedish short form, e.g. `5 mars 14:07`.
pub fn format_display_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {} {:02}:{:02}",
        dt.day(),
        MONTHS_SV[dt.month0() as usize],
        dt.hour(),
        dt.minute()
    )
}

pub fn format_local(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|d| format_display_date(&d.with_timezone(&Local)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, name: &str, last_activity: Option<&str>) -> Card {
        Card {
            id: id.into(),
            name: name.into(),
            date_last_activity: last_activity
                .map(|s| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)),
            ..Card::default()
        }
    }

    #[test]
    fn title_date_wins_over_other_timestamps() {
        let c = card(
            "5f2b8c1e0000000000000000",
            "Möte 2024-06-12 med kund",
            Some("2023-01-01T10:00:00Z"),
        );
        let date = display_date(&c).unwrap();
        assert_eq!(date.to_rfc3339(), "2024-06-12T00:00:00+00:00");
    }

    #[test]
    fn id_timestamp_used_without_title_date() {
        // 0x5f2b8c1e = 1596689438
        let c = card("5f2b8c1e0000000000000000", "Order 1042", Some("2023-01-01T10:00:00Z"));
        let date = display_date(&c).unwrap();
        assert_eq!(date.timestamp_millis(), 1_596_689_438_000);
    }

    #[test]
    fn invalid_title_date_is_skipped() {
        let c = card("5f2b8c1e0000000000000000", "Order 2024-13-40", None);
        assert_eq!(display_date(&c).unwrap().timestamp(), 1_596_689_438);
    }

    #[test]
    fn later_valid_title_date_is_found() {
        let date = title_date("2024-02-30 flyttad till 2024-03-01").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn falls_back_to_last_activity() {
        let c = card("not-hex-id", "Order", Some("2023-01-01T10:00:00Z"));
        assert_eq!(
            display_date(&c).unwrap().to_rfc3339(),
            "2023-01-01T10:00:00+00:00"
        );
    }

    #[test]
    fn nothing_to_derive_from() {
        assert_eq!(display_date(&card("xyz", "Order", None)), None);
    }

    #[test]
    fn short_id_has_no_timestamp() {
        assert_eq!(id_timestamp("5f2b"), None);
        assert_eq!(id_timestamp("+f2b8c1e00"), None);
    }

    #[test]
    fn formats_swedish_short_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_display_date(&dt), "5 mars 14:07");
        let dt = Utc.with_ymd_and_hms(2024, 12, 24, 9, 30, 0).unwrap();
        assert_eq!(format_display_date(&dt), "24 dec. 09:30");
    }

    #[test]
    fn missing_date_formats_empty() {
        assert_eq!(format_local(None), "");
    }
}
