//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::entities::{ForecastDay, WeatherSnapshot};
use domain::value_objects::UnitSystem;
use integration_weather::{
    ForecastResponse, WeatherApiClient, WeatherApiConfig, WeatherClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups using WeatherAPI.com
#[derive(Debug)]
pub struct WeatherAdapter {
    client: WeatherApiClient,
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client =
            WeatherApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::MissingApiKey => {
                ApplicationError::Configuration("Weather API key not configured".into())
            },
            WeatherError::Http { status: 400, body } => ApplicationError::InvalidRequest(body),
            WeatherError::Http {
                status: 401 | 403,
                body,
            } => ApplicationError::NotAuthorized(body),
            WeatherError::Http { status, body } => ApplicationError::Upstream {
                status,
                message: body,
            },
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ParseError(e) => ApplicationError::ExternalService(e),
        }
    }

    /// Reshape an upstream forecast into a snapshot in the requested units
    #[must_use]
    pub fn to_snapshot(response: &ForecastResponse, units: UnitSystem) -> WeatherSnapshot {
        let current = &response.current;
        let metric = units == UnitSystem::Metric;
        let pick = |c: f64, f: f64| if metric { c } else { f };

        let forecast = response
            .forecast
            .forecastday
            .iter()
            .map(|day| ForecastDay {
                day: weekday_label(&day.date),
                high: round(pick(day.day.maxtemp_c, day.day.maxtemp_f)),
                low: round(pick(day.day.mintemp_c, day.day.mintemp_f)),
                icon: day.day.condition.icon_code(),
                condition: day.day.condition.text.clone(),
            })
            .collect();

        WeatherSnapshot {
            location: response.location.label(),
            temperature: round(pick(current.temp_c, current.temp_f)),
            description: current.condition.text.clone(),
            humidity: current.humidity,
            wind_speed: pick(current.wind_kph, current.wind_mph),
            icon: current.condition.icon_code(),
            forecast,
            feels_like: round(pick(current.feelslike_c, current.feelslike_f)),
            uv: current.uv,
            visibility: pick(current.vis_km, current.vis_miles),
            local_time: response.location.localtime.clone(),
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity
#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Short weekday ("Mon") for a `YYYY-MM-DD` date; unparsable dates are kept
fn weekday_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%a").to_string())
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn get_weather(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let response = self
            .client
            .forecast(location)
            .await
            .map_err(Self::map_error)?;

        debug!(location = %response.location.name, "Weather data received");
        Ok(Self::to_snapshot(&response, units))
    }
}
