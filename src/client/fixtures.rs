//! Test fixtures and builders for model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use url::Url;

use super::models::{Event, Location, Media, Trip};

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0)
        .single()
        .unwrap_or_default()
}

// ============================================================================
// TripBuilder
// ============================================================================

/// Builder for creating test Trip instances.
///
/// # Example
/// ```ignore
/// let trip = TripBuilder::new(1)
///     .name("Lisbon")
///     .event(EventBuilder::new(10).build())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TripBuilder {
    id: i64,
    name: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    events: Vec<Event>,
}

impl TripBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Trip {}", id),
            start_date: base_date(),
            end_date: base_date() + Duration::days(7),
            events: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dates(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn build(self) -> Trip {
        Trip {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            events: self.events,
        }
    }
}

// ============================================================================
// EventBuilder
// ============================================================================

/// Builder for creating test Event instances.
#[derive(Debug, Clone)]
pub struct EventBuilder {
    id: i64,
    name: String,
    note: Option<String>,
    date: DateTime<Utc>,
    location: Option<Location>,
    medias: Vec<Media>,
    transition_from_previous: Option<String>,
}

impl EventBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Event {}", id),
            note: None,
            date: base_date() + Duration::hours(id),
            location: None,
            medias: Vec::new(),
            transition_from_previous: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64, address: Option<&str>) -> Self {
        self.location = Some(Location {
            latitude,
            longitude,
            address: address.map(str::to_string),
        });
        self
    }

    pub fn media(mut self, id: i64) -> Self {
        self.medias.push(Media {
            id,
            url: Url::parse(&format!("http://localhost:8000/media/{}.jpg", id)).ok(),
        });
        self
    }

    pub fn transition(mut self, transition: impl Into<String>) -> Self {
        self.transition_from_previous = Some(transition.into());
        self
    }

    pub fn build(self) -> Event {
        Event {
            id: self.id,
            name: self.name,
            note: self.note,
            date: self.date,
            location: self.location,
            medias: self.medias,
            transition_from_previous: self.transition_from_previous,
        }
    }
}

/// Minimal trip body as the service returns it.
pub fn trip_json(id: i64, name: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "start_date": "2024-06-01T08:00:00Z",
        "end_date": "2024-06-08T08:00:00Z",
        "events": []
    })
    .to_string()
}
