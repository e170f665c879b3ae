//! Command implementations for the air quality CLI.
//!
//! Each subcommand drives one lookup controller against the status service
//! and prints the classified result.

use aq_core::api::HttpTransport;
use aq_core::mode::{CityInput, CoordinatesInput, StationInput};
use aq_core::{CityLookup, CoordinatesLookup, StationLookup};
use clap::Subcommand;
use url::Url;

pub mod lookup;
pub mod render;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Current air quality at geographic coordinates
    Geo {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Current air quality for a city
    City {
        /// City name, as the service knows it
        city: String,
    },

    /// Current air quality reported by a monitoring station
    Station {
        /// Numeric station ID
        id: i64,
    },
}

pub async fn run(command: Command, base_url: &Url) -> anyhow::Result<()> {
    let transport = HttpTransport::default();
    let result = match command {
        Command::Geo { lat, lon } => {
            lookup::lookup::<CoordinatesLookup, _>(
                base_url,
                CoordinatesInput::new(lat, lon),
                &transport,
            )
            .await?
        }
        Command::City { city } => {
            lookup::lookup::<CityLookup, _>(base_url, CityInput::new(city), &transport).await?
        }
        Command::Station { id } => {
            lookup::lookup::<StationLookup, _>(base_url, StationInput::new(id), &transport)
                .await?
        }
    };
    print!("{}", render::render_text(&result));
    Ok(())
}
