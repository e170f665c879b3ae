//! Lookup modes.
//!
//! Each mode is a zero-sized strategy implementing [`LookupMode`]: it owns
//! the input shape, the validation rule and the request URL for one of the
//! three `/api/status/*` endpoints. [`LookupController`] is generic over it.
//!
//! [`LookupController`]: crate::controller::LookupController

use std::fmt::Debug;

use url::Url;

use crate::error::QueryError;

/// Which lookup a controller performs.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Mode {
    Coordinates,
    City,
    Station,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Coordinates => "coordinates",
            Mode::City => "city",
            Mode::Station => "station",
        }
    }

    /// Banner text when the mode's required input is absent.
    pub fn missing_input_message(self) -> &'static str {
        match self {
            Mode::Coordinates => "Missing coordinates",
            Mode::City => "Missing city",
            Mode::Station => "Missing station ID",
        }
    }
}

/// Validation and request building for one lookup mode.
pub trait LookupMode: 'static {
    /// Editable input as the view holds it
    type Input: Debug + Clone + Default + PartialEq + 'static;
    /// Input that passed validation
    type Query: Debug + Clone + PartialEq;

    const MODE: Mode;

    fn validate(input: &Self::Input) -> Result<Self::Query, QueryError>;

    fn request_url(query: &Self::Query, base: &Url) -> Result<Url, QueryError>;
}

/// Number of decimal places kept from a geolocation fix.
pub const COORDINATE_PRECISION: i32 = 5;

/// Round a coordinate to [`COORDINATE_PRECISION`] decimal places.
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_PRECISION);
    (value * scale).round() / scale
}

/// Parse a free-form decimal entry; blank or malformed text is `None`.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a station id entry; blank or malformed text is `None`.
pub fn parse_station_id(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// `base` with its path replaced by `segments`, query cleared.
fn endpoint<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, QueryError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| QueryError::Transport(format!("invalid service URL: {}", base)))?
        .clear()
        .extend(segments);
    Ok(url)
}

/// Latitude/longitude entry.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct CoordinatesInput {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl CoordinatesInput {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }
}

/// Validated coordinates.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// `GET /api/status/geo?lat=..&lon=..`
#[derive(Debug, Clone, Copy)]
pub struct CoordinatesLookup;

impl LookupMode for CoordinatesLookup {
    type Input = CoordinatesInput;
    type Query = Coordinates;

    const MODE: Mode = Mode::Coordinates;

    fn validate(input: &CoordinatesInput) -> Result<Coordinates, QueryError> {
        // A zero entry is what an untouched numeric field holds.
        let present = |v: Option<f64>| v.filter(|v| *v != 0.0 && v.is_finite());
        match (present(input.latitude), present(input.longitude)) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(QueryError::MissingInput(Mode::Coordinates)),
        }
    }

    fn request_url(query: &Coordinates, base: &Url) -> Result<Url, QueryError> {
        let mut url = endpoint(base, ["api", "status", "geo"])?;
        url.query_pairs_mut()
            .append_pair("lat", &query.latitude.to_string())
            .append_pair("lon", &query.longitude.to_string());
        Ok(url)
    }
}

/// City name entry.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct CityInput {
    pub city: String,
}

impl CityInput {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// `GET /api/status/city/{city}`
#[derive(Debug, Clone, Copy)]
pub struct CityLookup;

impl LookupMode for CityLookup {
    type Input = CityInput;
    type Query = String;

    const MODE: Mode = Mode::City;

    fn validate(input: &CityInput) -> Result<String, QueryError> {
        let city = input.city.trim();
        if city.is_empty() {
            return Err(QueryError::MissingInput(Mode::City));
        }
        Ok(city.to_string())
    }

    fn request_url(city: &String, base: &Url) -> Result<Url, QueryError> {
        endpoint(base, ["api", "status", "city", city.as_str()])
    }
}

/// Station id entry.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct StationInput {
    pub station: Option<i64>,
}

impl StationInput {
    pub fn new(station: i64) -> Self {
        Self {
            station: Some(station),
        }
    }
}

/// `GET /api/status/station/{id}`
#[derive(Debug, Clone, Copy)]
pub struct StationLookup;

impl LookupMode for StationLookup {
    type Input = StationInput;
    type Query = i64;

    const MODE: Mode = Mode::Station;

    fn validate(input: &StationInput) -> Result<i64, QueryError> {
        input
            .station
            .filter(|id| *id != 0)
            .ok_or(QueryError::MissingInput(Mode::Station))
    }

    fn request_url(id: &i64, base: &Url) -> Result<Url, QueryError> {
        endpoint(base, ["api", "status", "station", id.to_string().as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:8000").unwrap()
    }

    #[test]
    fn test_coordinates_validation() {
        let missing = [
            CoordinatesInput::default(),
            CoordinatesInput {
                latitude: Some(51.5),
                longitude: None,
            },
            CoordinatesInput {
                latitude: None,
                longitude: Some(-0.12),
            },
            CoordinatesInput::new(0.0, -0.12),
            CoordinatesInput::new(f64::NAN, 1.0),
            CoordinatesInput::new(51.5, f64::INFINITY),
            CoordinatesInput::new(f64::NEG_INFINITY, -0.12),
        ];
        for input in missing {
            assert_eq!(
                CoordinatesLookup::validate(&input),
                Err(QueryError::MissingInput(Mode::Coordinates)),
                "{:?}",
                input
            );
        }
        let ok = CoordinatesLookup::validate(&CoordinatesInput::new(51.5, -0.12)).unwrap();
        assert_eq!(ok.latitude, 51.5);
        assert_eq!(ok.longitude, -0.12);
    }

    #[test]
    fn test_coordinates_url() {
        let query = Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        };
        let url = CoordinatesLookup::request_url(&query, &base()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/status/geo?lat=51.5&lon=-0.12");
    }

    #[test]
    fn test_city_validation() {
        assert_eq!(
            CityLookup::validate(&CityInput::default()),
            Err(QueryError::MissingInput(Mode::City))
        );
        assert_eq!(
            CityLookup::validate(&CityInput::new("   ")),
            Err(QueryError::MissingInput(Mode::City))
        );
        assert_eq!(
            CityLookup::validate(&CityInput::new(" Moscow ")).unwrap(),
            "Moscow"
        );
    }

    #[test]
    fn test_city_url_is_percent_encoded() {
        let url = CityLookup::request_url(&"São Paulo".to_string(), &base()).unwrap();
        assert_eq!(url.path(), "/api/status/city/S%C3%A3o%20Paulo");

        let url = CityLookup::request_url(&"a/b?c#d".to_string(), &base()).unwrap();
        assert_eq!(url.path(), "/api/status/city/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_station_validation_and_url() {
        assert_eq!(
            StationLookup::validate(&StationInput::default()),
            Err(QueryError::MissingInput(Mode::Station))
        );
        assert_eq!(
            StationLookup::validate(&StationInput::new(0)),
            Err(QueryError::MissingInput(Mode::Station))
        );
        let id = StationLookup::validate(&StationInput::new(1451)).unwrap();
        let url = StationLookup::request_url(&id, &base()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/status/station/1451");
    }

    #[test]
    fn test_endpoint_replaces_base_path() {
        let base = Url::parse("https://example.org/index.html?tab=city#x").unwrap();
        let url = StationLookup::request_url(&7, &base).unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/status/station/7");
    }

    #[test]
    fn test_round_coordinate() {
        assert_eq!(round_coordinate(51.507_351_234), 51.50735);
        assert_eq!(round_coordinate(-0.127_758_9), -0.12776);
        assert_eq!(round_coordinate(12.0), 12.0);
    }

    #[test]
    fn test_parse_entries() {
        assert_eq!(parse_coordinate(" 51.5 "), Some(51.5));
        assert_eq!(parse_coordinate("-0.12"), Some(-0.12));
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("north"), None);
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_station_id("1451"), Some(1451));
        assert_eq!(parse_station_id("14.5"), None);
        assert_eq!(parse_station_id(""), None);
    }
}
