//! Minimal iCalendar (RFC 5545) export, one VEVENT
//!
//! Apple Calendar opens the downloaded file directly.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use super::{utc_stamp, PartyEvent};
use crate::Result;

pub const ICS_FILENAME: &str = "aniversario-henrique.ics";
const PRODID: &str = "-//Aniversário Henrique//PT";
const UID_DOMAIN: &str = "aniversario-henrique.com";
/// Content lines longer than this are folded
const MAX_LINE_OCTETS: usize = 75;

/// Fresh globally unique event identifier
pub fn new_uid() -> String {
    format!("{}@{}", Uuid::new_v4(), UID_DOMAIN)
}

/// Render the calendar file. `uid` and `stamp` are the only inputs that
/// change between calls.
pub fn build_ics(event: &PartyEvent, uid: &str, stamp: DateTime<Utc>) -> String {
    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", uid),
        format!("DTSTAMP:{}", utc_stamp(&stamp)),
        format!("DTSTART:{}", utc_stamp(&event.starts_at)),
        format!("DTEND:{}", utc_stamp(&event.ends_at)),
        format!("SUMMARY:{}", escape_text(event.title)),
        format!("DESCRIPTION:{}", escape_text(event.description)),
        format!("LOCATION:{}", escape_text(event.location)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str("\r\n");
    }
    out
}

/// Write the calendar file into `dir`, returning its path
pub fn write_ics(dir: &Path, event: &PartyEvent) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(ICS_FILENAME);
    std::fs::write(&path, build_ics(event, &new_uid(), Utc::now()))?;
    info!(path = %path.display(), "calendar file written");
    Ok(path)
}

/// TEXT value escaping
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

/// Split a content line at 75 octets without breaking a UTF-8 sequence
fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            // the leading space counts toward the next line
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_specials() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("linha 1\nlinha 2"), "linha 1\\nlinha 2");
    }

    #[test]
    fn folds_long_lines_on_char_boundaries() {
        let line = format!("DESCRIPTION:{}", "ã".repeat(60));
        let folded = fold_line(&line);

        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS, "{} octets", physical.len());
        }
        assert_eq!(folded.replace("\r\n ", ""), line);
    }

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(fold_line("VERSION:2.0"), "VERSION:2.0");
    }

    #[test]
    fn uid_is_unique_and_scoped() {
        let a = new_uid();
        let b = new_uid();
        assert_ne!(a, b);
        assert!(a.ends_with("@aniversario-henrique.com"));
    }
}
