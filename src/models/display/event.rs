//! Event display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::Event;
use crate::output::formatters::{format_location, truncate};

const NOTE_WIDTH: usize = 40;

/// Event display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EventDisplay {
    #[tabled(rename = "EVENT ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Timestamp (ISO 8601, UTC)
    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// Number of attached media items
    #[tabled(rename = "MEDIA")]
    pub media: usize,

    #[tabled(rename = "NOTE")]
    pub note: String,
}

impl From<&Event> for EventDisplay {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            date: event.date.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            location: format_location(event.location.as_ref()),
            media: event.medias.len(),
            note: event
                .note
                .as_deref()
                .map(|n| truncate(n, NOTE_WIDTH))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
