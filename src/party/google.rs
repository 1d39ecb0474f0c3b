use urlencoding::encode;

use super::{utc_stamp, PartyEvent};

const GOOGLE_CALENDAR_RENDER: &str = "https://calendar.google.com/calendar/render";
const GOOGLE_MAPS_SEARCH: &str = "https://www.google.com/maps/search/";

/// Google Calendar "add event" template link for `event`
pub fn google_calendar_url(event: &PartyEvent) -> String {
    format!(
        "{}?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}&ctz={}",
        GOOGLE_CALENDAR_RENDER,
        encode(event.title),
        utc_stamp(&event.starts_at),
        utc_stamp(&event.ends_at),
        encode(event.description),
        encode(event.location),
        event.timezone,
    )
}

/// Google Maps search link centred on the venue
pub fn google_maps_url(event: &PartyEvent) -> String {
    format!("{}?api=1&query={}", GOOGLE_MAPS_SEARCH, encode(event.location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_link_carries_encoded_fields() {
        let url = google_calendar_url(&PartyEvent::birthday());

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&"));
        assert!(url.contains("&dates=20250824T150000Z/20250824T220000Z&"));
        assert!(url.contains("text=Anivers%C3%A1rio%20do%20Henrique%20-%20Churrasco"));
        assert!(url.contains("location=R.%20Bar%C3%A3o%20do%20Rio%20Branco%2C%20161"));
        assert!(url.ends_with("&ctz=America/Sao_Paulo"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn map_link_searches_the_venue() {
        let url = google_maps_url(&PartyEvent::birthday());

        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(url.contains("Piraquara%20-%20PR"));
        assert!(!url.contains(' '));
    }
}
