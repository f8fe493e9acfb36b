//! Trip display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::Trip;

/// Trip display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TripDisplay {
    #[tabled(rename = "TRIP ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Start date (YYYY-MM-DD, UTC)
    #[tabled(rename = "START")]
    pub start: String,

    /// End date (YYYY-MM-DD, UTC)
    #[tabled(rename = "END")]
    pub end: String,

    /// Number of events recorded on the trip
    #[tabled(rename = "EVENTS")]
    pub events: usize,
}

impl From<&Trip> for TripDisplay {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            name: trip.name.clone(),
            start: trip.start_date.format("%Y-%m-%d").to_string(),
            end: trip.end_date.format("%Y-%m-%d").to_string(),
            events: trip.events.len(),
        }
    }
}

impl From<Trip> for TripDisplay {
    fn from(trip: Trip) -> Self {
        Self::from(&trip)
    }
}
