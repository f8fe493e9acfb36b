//! Event and location models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::Media;
use super::dates;

/// An event within a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(with = "dates")]
    pub date: DateTime<Utc>,

    #[serde(default)]
    pub location: Option<Location>,

    pub medias: Vec<Media>,

    /// How the traveller got here from the previous event
    #[serde(default)]
    pub transition_from_previous: Option<String>,
}

/// Geographic position with an optional street address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub address: Option<String>,
}

/// Body for `POST events`
#[derive(Debug, Clone, PartialEq)]
pub struct EventCreate {
    pub trip_id: i64,
    pub name: String,
    pub note: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<Location>,
    pub transition_from_previous: Option<String>,
}

/// Body for `PUT events/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct EventUpdate {
    pub name: String,
    pub note: Option<String>,
    pub date: DateTime<Utc>,
    pub location: Option<Location>,
    pub transition_from_previous: Option<String>,
}

impl From<&Event> for EventUpdate {
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            note: event.note.clone(),
            date: event.date,
            location: event.location.clone(),
            transition_from_previous: event.transition_from_previous.clone(),
        }
    }
}

// The service expects every key to be present: a missing note is sent as
// "", a missing location as 0/0 with an empty address.
#[derive(Serialize)]
struct LocationWire<'a> {
    latitude: f64,
    longitude: f64,
    address: &'a str,
}

#[derive(Serialize)]
struct EventWire<'a> {
    name: &'a str,
    #[serde(with = "dates")]
    date: DateTime<Utc>,
    note: &'a str,
    location: LocationWire<'a>,
    transition_from_previous: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trip_id: Option<i64>,
}

impl<'a> EventWire<'a> {
    fn new(
        name: &'a str,
        date: DateTime<Utc>,
        note: Option<&'a str>,
        location: Option<&'a Location>,
        transition: Option<&'a str>,
        trip_id: Option<i64>,
    ) -> Self {
        Self {
            name,
            date,
            note: note.unwrap_or_default(),
            location: LocationWire {
                latitude: location.map(|l| l.latitude).unwrap_or(0.0),
                longitude: location.map(|l| l.longitude).unwrap_or(0.0),
                address: location
                    .and_then(|l| l.address.as_deref())
                    .unwrap_or_default(),
            },
            transition_from_previous: transition,
            trip_id,
        }
    }
}

impl Serialize for EventCreate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EventWire::new(
            &self.name,
            self.date,
            self.note.as_deref(),
            self.location.as_ref(),
            self.transition_from_previous.as_deref(),
            Some(self.trip_id),
        )
        .serialize(serializer)
    }
}

impl Serialize for EventUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EventWire::new(
            &self.name,
            self.date,
            self.note.as_deref(),
            self.location.as_ref(),
            self.transition_from_previous.as_deref(),
            None,
        )
        .serialize(serializer)
    }
}
