//! Remote services: current weather by city and a random advice slip.
//!
//! `Remote::dashboard` is the fetch orchestrator: it fans both requests out
//! concurrently and joins them into a single outcome.

mod client;
mod error;
mod models;
mod resource;

pub use error::FetchError;
pub use resource::*;

use crate::config::Config;
use client::Client;
use log::*;
use models::{AdviceResponse, WeatherResponse};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_ADVICE_BASE_URL: &str = "https://api.adviceslip.com";

/// Responsible for asynchronous interaction with the weather and advice
/// services including transformation of response data into explicitly-defined
/// types.
///
pub struct Remote {
    weather_client: Client,
    advice_client: Client,
    weather_api_key: String,
}

impl Remote {
    /// Returns a new instance using the endpoints and key from configuration.
    ///
    pub fn new(config: &Config) -> Remote {
        Remote::with_endpoints(
            &config.weather_base_url,
            &config.advice_base_url,
            &config.weather_api_key,
        )
    }

    /// Returns a new instance for explicit endpoints.
    ///
    pub fn with_endpoints(
        weather_base_url: &str,
        advice_base_url: &str,
        weather_api_key: &str,
    ) -> Remote {
        debug!(
            "Initializing remote clients for {} and {}...",
            weather_base_url, advice_base_url
        );
        Remote {
            weather_client: Client::new(weather_base_url),
            advice_client: Client::new(advice_base_url),
            weather_api_key: weather_api_key.to_owned(),
        }
    }

    /// Returns current weather for the city.
    ///
    pub async fn weather(&self, city: &str) -> Result<Weather, FetchError> {
        debug!("Requesting current weather for '{}'...", city);
        let data: WeatherResponse = self
            .weather_client
            .get(
                "current.json",
                &[("key", self.weather_api_key.as_str()), ("q", city)],
            )
            .await?;
        Ok(Weather {
            location_name: data.location.name,
            region: data.location.region,
            temp_f: data.current.temp_f,
            condition: data.current.condition.text,
            humidity: data.current.humidity,
            wind_mph: data.current.wind_mph,
        })
    }

    /// Returns one random advice slip.
    ///
    pub async fn advice(&self) -> Result<Advice, FetchError> {
        debug!("Requesting random advice...");
        let data: AdviceResponse = self.advice_client.get("advice", &[]).await?;
        Ok(Advice {
            id: data.slip.id,
            text: data.slip.advice,
        })
    }

    /// Request weather and advice concurrently and join them. The first
    /// failure wins; the other request's result is discarded.
    ///
    pub async fn dashboard(&self, city: &str) -> Result<Dashboard, FetchError> {
        let (weather, advice) = tokio::try_join!(self.weather(city), self.advice())?;
        Ok(Dashboard { weather, advice })
    }
}
