//! Media models

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize, Serializer};
use url::Url;

/// Media attached to an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Server-assigned identifier
    pub id: i64,

    /// Where the service serves the file from
    #[serde(default)]
    pub url: Option<Url>,
}

/// Body for `POST media`. The raw bytes are base64-encoded on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaCreate {
    pub event_id: i64,
    pub data: Vec<u8>,
    pub caption: Option<String>,
}

#[derive(Serialize)]
struct MediaCreateWire<'a> {
    caption: &'a str,
    base64_data: String,
    event_id: i64,
}

impl Serialize for MediaCreate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MediaCreateWire {
            caption: self.caption.as_deref().unwrap_or_default(),
            base64_data: general_purpose::STANDARD.encode(&self.data),
            event_id: self.event_id,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_create_encodes_base64() {
        let request = MediaCreate {
            event_id: 12,
            data: b"hello".to_vec(),
            caption: Some("harbour".to_string()),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"caption": "harbour", "base64_data": "aGVsbG8=", "event_id": 12})
        );
    }

    #[test]
    fn test_media_create_without_caption_sends_empty_string() {
        let request = MediaCreate {
            event_id: 1,
            data: vec![],
            caption: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["caption"], "");
        assert_eq!(value["base64_data"], "");
    }

    #[test]
    fn test_media_url_optional() {
        let media: Media = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(media.id, 4);
        assert!(media.url.is_none());
    }

    #[test]
    fn test_media_url_parsed() {
        let media: Media =
            serde_json::from_str(r#"{"id": 4, "url": "http://localhost:8000/media/4.jpg"}"#)
                .unwrap();
        let url = media.url.unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.path(), "/media/4.jpg");
    }

    #[test]
    fn test_media_malformed_url_rejected() {
        let result = serde_json::from_str::<Media>(r#"{"id": 4, "url": "not a url"}"#);
        assert!(result.is_err());
    }
}
