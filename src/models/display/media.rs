//! Media display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::Media;

/// Media display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MediaDisplay {
    #[tabled(rename = "MEDIA ID")]
    pub id: i64,

    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&Media> for MediaDisplay {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id,
            url: media
                .url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}
