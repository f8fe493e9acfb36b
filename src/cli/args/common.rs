//! Common CLI types shared across commands

use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;

use crate::client::Location;
use crate::client::models::dates;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse a date argument.
///
/// Accepts a full timestamp (`2024-06-01T08:00:00Z`, or without offset as
/// UTC) or a bare date (`2024-06-01`, midnight UTC).
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    if let Some(date) = dates::parse(value) {
        return Ok(date);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD or ISO 8601", value))
}

/// Optional event location flags
#[derive(Debug, Clone, Args, Default)]
pub struct LocationArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Street address
    #[arg(long)]
    pub address: Option<String>,
}

impl LocationArgs {
    /// Build a location when coordinates or an address were given.
    ///
    /// An address alone is placed at 0/0, matching how the service fills
    /// missing coordinates.
    pub fn to_location(&self) -> Option<Location> {
        match (self.lat, self.lon, &self.address) {
            (None, None, None) => None,
            (lat, lon, address) => Some(Location {
                latitude: lat.unwrap_or_default(),
                longitude: lon.unwrap_or_default(),
                address: address.clone(),
            }),
        }
    }

    /// Overlay the given flags on an existing location.
    ///
    /// Fields without a flag keep their current value; with no current
    /// location this behaves like [`LocationArgs::to_location`].
    pub fn merge_onto(&self, current: Option<&Location>) -> Option<Location> {
        let Some(current) = current else {
            return self.to_location();
        };

        let mut merged = current.clone();
        if let Some(lat) = self.lat {
            merged.latitude = lat;
        }
        if let Some(lon) = self.lon {
            merged.longitude = lon;
        }
        if let Some(address) = &self.address {
            merged.address = Some(address.clone());
        }
        Some(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_bare_date() {
        assert_eq!(
            parse_datetime("2024-06-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_timestamp() {
        assert_eq!(
            parse_datetime("2024-06-01T08:30:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 6, 30, 0).unwrap()
        );
        assert_eq!(
            parse_datetime("2024-06-01T08:30:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        let err = parse_datetime("next tuesday").unwrap_err();
        assert!(err.contains("next tuesday"));
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_location_args() {
        assert!(LocationArgs::default().to_location().is_none());

        let args = LocationArgs {
            lat: Some(64.1),
            lon: Some(-21.9),
            address: None,
        };
        let loc = args.to_location().unwrap();
        assert_eq!(loc.latitude, 64.1);
        assert_eq!(loc.longitude, -21.9);
        assert!(loc.address.is_none());

        let args = LocationArgs {
            address: Some("Reykjavík".to_string()),
            ..Default::default()
        };
        let loc = args.to_location().unwrap();
        assert_eq!(loc.latitude, 0.0);
        assert_eq!(loc.address.as_deref(), Some("Reykjavík"));
    }

    #[test]
    fn test_merge_onto_keeps_unset_fields() {
        let current = Location {
            latitude: 38.7,
            longitude: -9.1,
            address: Some("old".to_string()),
        };

        let address_only = LocationArgs {
            address: Some("new".to_string()),
            ..Default::default()
        };
        let merged = address_only.merge_onto(Some(&current)).unwrap();
        assert_eq!(merged.latitude, 38.7);
        assert_eq!(merged.longitude, -9.1);
        assert_eq!(merged.address.as_deref(), Some("new"));

        let coords_only = LocationArgs {
            lat: Some(41.1),
            lon: Some(-8.6),
            address: None,
        };
        let merged = coords_only.merge_onto(Some(&current)).unwrap();
        assert_eq!(merged.latitude, 41.1);
        assert_eq!(merged.longitude, -8.6);
        assert_eq!(merged.address.as_deref(), Some("old"));

        assert_eq!(
            LocationArgs::default().merge_onto(Some(&current)),
            Some(current.clone())
        );
    }

    #[test]
    fn test_merge_onto_without_current() {
        assert!(LocationArgs::default().merge_onto(None).is_none());

        let args = LocationArgs {
            address: Some("Porto".to_string()),
            ..Default::default()
        };
        let merged = args.merge_onto(None).unwrap();
        assert_eq!(merged.latitude, 0.0);
        assert_eq!(merged.address.as_deref(), Some("Porto"));
    }
}
