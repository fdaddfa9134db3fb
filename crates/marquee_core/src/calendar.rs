//! iCalendar export for booked appointments.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use derive_getters::Getters;
use marquee_error::InputError;

const ICS_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";
/// Content lines longer than this many octets are folded.
const ICS_LINE_LIMIT: usize = 75;

/// A single calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CalendarEvent {
    /// Title line
    summary: String,
    /// Body text
    description: String,
    /// Start, in UTC
    start: DateTime<Utc>,
    /// End, in UTC
    end: DateTime<Utc>,
    /// When the entry was created
    stamp: DateTime<Utc>,
}

impl CalendarEvent {
    /// One-hour appointment for `service` at a `business_type`.
    pub fn for_appointment(
        service: &str,
        business_type: &str,
        start: DateTime<Utc>,
    ) -> Result<Self, InputError> {
        let service = service.trim();
        if service.is_empty() {
            return Err(InputError::new("a service is required for calendar export"));
        }
        Ok(Self {
            summary: format!("{} Appointment", service),
            description: format!("{} - {}", business_type.trim(), service),
            start,
            end: start + Duration::hours(1),
            stamp: Utc::now(),
        })
    }

    /// Render as an RFC 5545 document with CRLF line endings.
    pub fn to_ics(&self) -> String {
        let uid = format!(
            "{}-{}@marquee",
            self.start.timestamp(),
            self.summary
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_lowercase()
        );
        [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "PRODID:-//Marquee//Appointment Assistant//EN".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", uid),
            format!("DTSTAMP:{}", self.stamp.format(ICS_TIME_FORMAT)),
            format!("DTSTART:{}", self.start.format(ICS_TIME_FORMAT)),
            format!("DTEND:{}", self.end.format(ICS_TIME_FORMAT)),
            format!("SUMMARY:{}", escape_text(&self.summary)),
            format!("DESCRIPTION:{}", escape_text(&self.description)),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ]
        .iter()
        .map(|line| fold_line(line))
        .collect::<Vec<_>>()
        .join("\r\n")
            + "\r\n"
    }
}

/// Parse an appointment time as entered by a user.
///
/// Accepts RFC 3339 (`2025-03-14T15:00:00Z`) or a local date-time without a
/// zone (`2025-03-14T15:00`, `2025-03-14 15:00`), which is read in the
/// machine's local time zone.
pub fn parse_start_time(input: &str) -> Result<DateTime<Utc>, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::new("an appointment time is required"));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| InputError::new(format!("unrecognized appointment time `{}`", input)))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| InputError::new(format!("`{}` is ambiguous in the local time zone", input)))
}

// Continuation lines start with a space, which counts toward their limit.
// Splits land on char boundaries so multi-byte text stays intact.
fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + line.len() / ICS_LINE_LIMIT * 3);
    let mut width = 0;
    for c in line.chars() {
        if width + c.len_utf8() > ICS_LINE_LIMIT {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(c);
        width += c.len_utf8();
    }
    folded
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_lasts_one_hour() {
        let start = parse_start_time("2025-03-14T15:00:00Z").unwrap();
        let event = CalendarEvent::for_appointment("Haircut", "Salon", start).unwrap();
        let ics = event.to_ics();
        assert!(ics.contains("DTSTART:20250314T150000Z\r\n"));
        assert!(ics.contains("DTEND:20250314T160000Z\r\n"));
        assert!(ics.contains("SUMMARY:Haircut Appointment\r\n"));
        assert!(ics.contains("DESCRIPTION:Salon - Haircut\r\n"));
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape_text("Cut, color; style"), "Cut\\, color\\; style");
    }

    #[test]
    fn long_lines_are_folded() {
        let start = parse_start_time("2025-03-14T15:00:00Z").unwrap();
        let service = "Balayage with toner, gloss, deep conditioning and a blowout café finish";
        let event = CalendarEvent::for_appointment(service, "Salon", start).unwrap();
        let ics = event.to_ics();
        for line in ics.split("\r\n") {
            assert!(line.len() <= ICS_LINE_LIMIT, "{} octets: {line}", line.len());
        }
        let unfolded = ics.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("SUMMARY:{} Appointment\r\n", escape_text(service))));
        assert!(unfolded.contains(&format!("DESCRIPTION:Salon - {}\r\n", escape_text(service))));
    }

    #[test]
    fn folding_respects_char_boundaries() {
        let line = format!("SUMMARY:{}", "é".repeat(60));
        let folded = fold_line(&line);
        assert!(folded.split("\r\n").all(|l| l.len() <= ICS_LINE_LIMIT));
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn blank_service_is_rejected() {
        let start = parse_start_time("2025-03-14T15:00:00+02:00").unwrap();
        assert!(CalendarEvent::for_appointment("  ", "Salon", start).is_err());
    }

    #[test]
    fn local_times_parse() {
        assert!(parse_start_time("2025-03-14T15:00").is_ok());
        assert!(parse_start_time("next tuesday").is_err());
        assert!(parse_start_time("").is_err());
    }
}
