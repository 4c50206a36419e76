use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Live event with its schedule and zoned pricing.
///
/// The backend stores dates and zones as a JSON-encoded `eventConfig`
/// string; [`Event::from_record`] parses it. A malformed config degrades
/// to empty lists rather than failing the whole catalog fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub venue: String,
    pub address: String,
    #[serde(default)]
    pub dates: Vec<EventDate>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDate {
    pub date: NaiveDate,
    pub time: String,
}

/// Named pricing/capacity section of an event venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub capacity: u32,
    pub categories: Vec<TicketCategory>,
}

/// Ticket category inside a zone (e.g. Adult/Child), price in whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketCategory {
    pub name: String,
    pub price: i64,
}

/// Wire shape of an event row as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub title: String,
    pub venue: String,
    pub address: String,
    #[serde(rename = "eventConfig")]
    pub event_config: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct EventConfig {
    #[serde(default)]
    dates: Vec<EventDate>,
    #[serde(default)]
    zones: Vec<Zone>,
}

impl Event {
    pub fn from_record(record: EventRecord) -> Self {
        let config = record
            .event_config
            .as_deref()
            .and_then(|raw| match serde_json::from_str::<EventConfig>(raw) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("event {}: unparseable eventConfig: {}", record.id, e);
                    None
                }
            })
            .unwrap_or_default();

        Event {
            id: record.id,
            title: record.title,
            venue: record.venue,
            address: record.address,
            dates: config.dates,
            zones: config.zones,
        }
    }

    pub fn zone(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(config: Option<&str>) -> EventRecord {
        EventRecord {
            id: 7,
            title: "Indie Night".to_string(),
            venue: "Riverside Arena".to_string(),
            address: "12 Quay St".to_string(),
            event_config: config.map(str::to_string),
        }
    }

    #[test]
    fn parses_dates_and_zones_from_config() {
        let raw = r#"{
            "dates": [{"date": "2026-09-12", "time": "19:30"}],
            "zones": [{
                "name": "Front",
                "capacity": 40,
                "categories": [{"name": "Adult", "price": 500}, {"name": "Child", "price": 250}]
            }]
        }"#;
        let event = Event::from_record(record(Some(raw)));
        assert_eq!(event.dates.len(), 1);
        assert_eq!(event.zones[0].categories[1].price, 250);
        assert_eq!(event.zone("Front").map(|z| z.capacity), Some(40));
    }

    #[test]
    fn malformed_config_degrades_to_empty() {
        let event = Event::from_record(record(Some("{not json")));
        assert!(event.dates.is_empty());
        assert!(event.zones.is_empty());
    }

    #[test]
    fn missing_config_degrades_to_empty() {
        let event = Event::from_record(record(None));
        assert!(event.dates.is_empty());
        assert!(event.zones.is_empty());
    }
}
