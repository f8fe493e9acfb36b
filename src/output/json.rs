//! JSON envelope for `--format json`
//!
//! Every JSON document has the shape `{"data": ..., "meta": {...}}` so
//! scripts can rely on one layout across commands.

use chrono::Utc;
use serde::Serialize;

use crate::client::models::dates;

/// Borrowed payload plus generation metadata
#[derive(Serialize)]
pub struct Envelope<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    /// When the document was produced, in the service's date format
    pub timestamp: String,
    pub version: &'static str,
}

impl Meta {
    pub fn now() -> Self {
        Self {
            timestamp: dates::format(&Utc::now()),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl<'a, T: Serialize + ?Sized> Envelope<'a, T> {
    pub fn wrap(data: &'a T) -> Self {
        Self {
            data,
            meta: Meta::now(),
        }
    }
}

/// Render `data` inside the envelope, pretty-printed.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Envelope::wrap(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::TripBuilder;
    use serde_json::Value;

    #[test]
    fn test_meta_now() {
        let meta = Meta::now();
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert!(dates::parse(&meta.timestamp).is_some());
        assert!(meta.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_format_json_trip() {
        let trip = TripBuilder::new(3).name("Kyoto").build();
        let value: Value = serde_json::from_str(&format_json(&trip).unwrap()).unwrap();

        assert_eq!(value["data"]["name"], "Kyoto");
        assert_eq!(value["data"]["start_date"], "2024-06-01T08:00:00Z");
        assert_eq!(value["meta"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_format_json_empty_slice() {
        let trips: &[crate::client::Trip] = &[];
        let value: Value = serde_json::from_str(&format_json(trips).unwrap()).unwrap();
        assert_eq!(value["data"], Value::Array(vec![]));
    }
}
