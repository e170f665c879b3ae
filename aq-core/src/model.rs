use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::severity::{classify, Classification};

/// Monitoring station that produced a reading.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct Station {
    /// Service-wide station identifier
    pub id: i64,
    /// Human-readable name of the station
    #[serde(default)]
    pub name: String,
    /// Station page on the data provider's site
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Current air quality status for one station, as returned by
/// `/api/status/*`.
///
/// Pollutant fields are `None` whenever the service omits them or sends
/// `null`. `level` is kept as the raw identifier so values the client does
/// not know yet still decode.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct QueryResult {
    pub station: Station,
    #[serde(default)]
    pub aqi: Option<f64>,
    #[serde(default)]
    pub pm25: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub co: Option<f64>,
    /// Time of the last update, passed through as sent
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub level: String,
}

impl QueryResult {
    /// Decode a status document from a response body.
    pub fn from_json(body: &str) -> Result<QueryResult, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn classification(&self) -> Classification {
        classify(&self.level)
    }

    /// Labelled readings in display order, skipping absent fields.
    pub fn readings(&self) -> Vec<(&'static str, f64)> {
        [
            ("Air quality index", self.aqi),
            ("Particulate matter 2.5", self.pm25),
            ("Particulate matter 10", self.pm10),
            ("Ozone", self.o3),
            ("Nitrogen dioxide", self.no2),
            ("Sulfur dioxide", self.so2),
            ("Carbon monoxide", self.co),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }

    /// `time` parsed as RFC 3339, if it is one.
    pub fn updated_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.time.trim()).ok()
    }

    /// "Last updated" text: normalized when `time` parses, raw otherwise.
    pub fn updated_display(&self) -> String {
        match self.updated_at() {
            Some(at) => at.format("%Y-%m-%d %H:%M %:z").to_string(),
            None => self.time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STATUS_GOOD: &str = include_str!("../../fixtures/status-good.json");
    static STATUS_UNKNOWN_LEVEL: &str = include_str!("../../fixtures/status-unknown-level.json");

    #[test]
    fn test_decode_full_status() {
        let result = QueryResult::from_json(STATUS_GOOD).unwrap();
        assert_eq!(result.station.id, 7);
        assert_eq!(result.station.name, "London Westminster");
        assert!(result.station.url.is_some());
        assert_eq!(result.aqi, Some(42.0));
        assert_eq!(result.o3, Some(21.4));
        assert_eq!(result.so2, None);
        assert_eq!(result.co, None);
        assert_eq!(result.level, "good");
        assert_eq!(result.classification().title, "Good");
    }

    #[test]
    fn test_decode_minimal_status() {
        let body = r#"{"station":{"id":7,"name":"X"},"aqi":42,"level":"good","time":"T"}"#;
        let result = QueryResult::from_json(body).unwrap();
        assert_eq!(result.station, Station {
            id: 7,
            name: "X".to_string(),
            url: None,
            lat: None,
            lon: None,
        });
        assert_eq!(result.time, "T");
        assert_eq!(result.pm25, None);
        assert_eq!(result.readings(), vec![("Air quality index", 42.0)]);
    }

    #[test]
    fn test_decode_unknown_level() {
        let result = QueryResult::from_json(STATUS_UNKNOWN_LEVEL).unwrap();
        assert_eq!(result.level, "unknown_future_value");
        assert_eq!(result.classification().title, "");
    }

    #[test]
    fn test_decode_rejects_missing_station() {
        assert!(QueryResult::from_json(r#"{"aqi": 10}"#).is_err());
        assert!(QueryResult::from_json("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_readings_order_and_omission() {
        let result = QueryResult::from_json(STATUS_GOOD).unwrap();
        let labels: Vec<&str> = result.readings().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Air quality index",
                "Particulate matter 2.5",
                "Particulate matter 10",
                "Ozone",
                "Nitrogen dioxide",
            ]
        );
    }

    #[test]
    fn test_updated_display() {
        let result = QueryResult::from_json(STATUS_UNKNOWN_LEVEL).unwrap();
        assert!(result.updated_at().is_some());
        assert_eq!(result.updated_display(), "2026-10-19 16:00 +08:00");

        let opaque = QueryResult::from_json(r#"{"station":{"id":1},"time":"T"}"#).unwrap();
        assert!(opaque.updated_at().is_none());
        assert_eq!(opaque.updated_display(), "T");
    }
}
