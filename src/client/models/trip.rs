//! Trip models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Event;
use super::dates;

/// A trip and its events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Server-assigned identifier
    pub id: i64,

    pub name: String,

    #[serde(with = "dates")]
    pub start_date: DateTime<Utc>,

    #[serde(with = "dates")]
    pub end_date: DateTime<Utc>,

    /// Events in server order
    pub events: Vec<Event>,
}

/// Body for `POST trips`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripCreate {
    pub name: String,

    #[serde(with = "dates")]
    pub start_date: DateTime<Utc>,

    #[serde(with = "dates")]
    pub end_date: DateTime<Utc>,
}

/// Body for `PUT trips/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripUpdate {
    pub name: String,

    #[serde(with = "dates")]
    pub start_date: DateTime<Utc>,

    #[serde(with = "dates")]
    pub end_date: DateTime<Utc>,
}

impl From<&Trip> for TripUpdate {
    fn from(trip: &Trip) -> Self {
        Self {
            name: trip.name.clone(),
            start_date: trip.start_date,
            end_date: trip.end_date,
        }
    }
}
