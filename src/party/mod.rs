//! The party itself: fixed event details and the ways to take them home
//! (calendar link, calendar file, a map, a chat with the host).

pub mod contact;
pub mod google;
pub mod ics;
pub mod launcher;

pub use contact::{contact_link, CONTACT_MESSAGE};
pub use google::{google_calendar_url, google_maps_url};
pub use ics::{build_ics, new_uid, write_ics, ICS_FILENAME};
pub use launcher::open_url;

use chrono::{DateTime, Utc};

/// 2025-08-24 15:00 UTC, noon in São Paulo
const START_TIMESTAMP: i64 = 1_756_047_600;
/// 2025-08-24 22:00 UTC, 19:00 in São Paulo
const END_TIMESTAMP: i64 = 1_756_072_800;

/// Hardcoded event metadata. Nothing the guest enters ends up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyEvent {
    pub title: &'static str,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub description: &'static str,
    pub location: &'static str,
    /// IANA zone the event is held in
    pub timezone: &'static str,
    pub display_date: &'static str,
    pub display_time: &'static str,
}

impl PartyEvent {
    pub fn birthday() -> Self {
        Self {
            title: "Aniversário do Henrique - Churrasco",
            starts_at: DateTime::from_timestamp(START_TIMESTAMP, 0).unwrap_or_default(),
            ends_at: DateTime::from_timestamp(END_TIMESTAMP, 0).unwrap_or_default(),
            description: "Festa de aniversário com churrasco, bebidas e muita diversão!",
            location: "R. Barão do Rio Branco, 161 - Vila San Remo I, Piraquara - PR, 83308-010",
            timezone: "America/Sao_Paulo",
            display_date: "24 de Agosto de 2025 (Domingo)",
            display_time: "⏰ Das 12:00 às 19:00",
        }
    }
}

impl Default for PartyEvent {
    fn default() -> Self {
        Self::birthday()
    }
}

/// Compact UTC form shared by the calendar link and file, e.g. `20250824T150000Z`
pub(crate) fn utc_stamp(at: &DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn birthday_runs_noon_to_seven_in_sao_paulo() {
        let event = PartyEvent::birthday();
        assert_eq!(
            event.starts_at,
            Utc.with_ymd_and_hms(2025, 8, 24, 15, 0, 0).unwrap()
        );
        assert_eq!(event.ends_at.hour(), 22);
        assert_eq!(utc_stamp(&event.starts_at), "20250824T150000Z");
    }
}
