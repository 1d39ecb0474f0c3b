//! Calendar file and link export

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use rsvp::party::{
    build_ics, contact_link, google_calendar_url, google_maps_url, ics::escape_text, write_ics, PartyEvent,
    CONTACT_MESSAGE, ICS_FILENAME,
};

/// Undo RFC 5545 line folding and split into content lines
fn content_lines(ics: &str) -> Vec<String> {
    ics.replace("\r\n ", "")
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn property<'a>(lines: &'a [String], name: &str) -> Option<&'a str> {
    let prefix = format!("{}:", name);
    lines
        .iter()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
}

#[test]
fn ics_has_one_event_with_the_fixed_details() {
    let event = PartyEvent::birthday();
    let stamp = Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap();
    let ics = build_ics(&event, "abc@aniversario-henrique.com", stamp);
    let lines = content_lines(&ics);

    assert_eq!(lines.first().map(String::as_str), Some("BEGIN:VCALENDAR"));
    assert_eq!(lines.last().map(String::as_str), Some("END:VCALENDAR"));
    assert_eq!(lines.iter().filter(|l| *l == "BEGIN:VEVENT").count(), 1);

    assert_eq!(property(&lines, "VERSION"), Some("2.0"));
    assert_eq!(property(&lines, "PRODID"), Some("-//Aniversário Henrique//PT"));
    assert_eq!(property(&lines, "UID"), Some("abc@aniversario-henrique.com"));
    assert_eq!(property(&lines, "DTSTAMP"), Some("20250801T093000Z"));
    assert_eq!(property(&lines, "DTSTART"), Some("20250824T150000Z"));
    assert_eq!(property(&lines, "DTEND"), Some("20250824T220000Z"));
    assert_eq!(property(&lines, "SUMMARY"), Some(escape_text(event.title).as_str()));
    assert_eq!(property(&lines, "LOCATION"), Some(escape_text(event.location).as_str()));
}

#[test]
fn ics_uses_crlf_and_short_lines() {
    let ics = build_ics(&PartyEvent::birthday(), "x@aniversario-henrique.com", Utc::now());

    assert!(ics.ends_with("\r\n"));
    assert!(!ics.replace("\r\n", "").contains('\n'));
    for line in ics.split("\r\n") {
        assert!(line.len() <= 75, "line of {} octets: {}", line.len(), line);
    }
}

#[test]
fn location_commas_are_escaped() {
    let ics = build_ics(&PartyEvent::birthday(), "x@aniversario-henrique.com", Utc::now());
    let lines = content_lines(&ics);
    let location = property(&lines, "LOCATION").unwrap();

    assert!(location.starts_with("R. Barão do Rio Branco\\, 161"));
    assert!(location.ends_with("PR\\, 83308-010"));
}

#[test]
fn write_ics_saves_into_the_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("Downloads");

    let path = write_ics(&dir, &PartyEvent::birthday()).unwrap();
    assert_eq!(path, dir.join(ICS_FILENAME));

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines = content_lines(&contents);
    assert_eq!(
        property(&lines, "SUMMARY"),
        Some("Aniversário do Henrique - Churrasco")
    );
    assert!(property(&lines, "UID").unwrap().ends_with("@aniversario-henrique.com"));
}

#[test]
fn each_export_gets_a_fresh_uid() {
    let temp = TempDir::new().unwrap();
    let event = PartyEvent::birthday();

    let first = std::fs::read_to_string(write_ics(temp.path(), &event).unwrap()).unwrap();
    let second = std::fs::read_to_string(write_ics(temp.path(), &event).unwrap()).unwrap();

    let uid = |ics: &str| property(&content_lines(ics), "UID").map(str::to_string);
    assert_ne!(uid(&first), uid(&second));
}

#[test]
fn google_link_and_file_agree_on_times() {
    let event = PartyEvent::birthday();
    let url = google_calendar_url(&event);
    let lines = content_lines(&build_ics(&event, "x@y", Utc::now()));

    let dates = format!(
        "dates={}/{}",
        property(&lines, "DTSTART").unwrap(),
        property(&lines, "DTEND").unwrap()
    );
    assert!(url.contains(&dates));
}

#[test]
fn contact_link_targets_the_host() {
    let link = contact_link(CONTACT_MESSAGE);
    assert!(link.starts_with("https://wa.me/5541991567448?text="));
    assert!(!link.contains(' '));
}

#[test]
fn map_link_points_at_the_same_venue_as_the_calendar() {
    let event = PartyEvent::birthday();
    let map = google_maps_url(&event);
    let calendar = google_calendar_url(&event);

    let query = map.split("query=").nth(1).expect("query parameter");
    assert!(calendar.contains(&format!("location={}&", query)));
    assert_eq!(
        urlencoding::decode(query).expect("valid percent encoding"),
        event.location
    );
}
