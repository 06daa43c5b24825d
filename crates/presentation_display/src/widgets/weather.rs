//! Weather widget

use std::sync::Arc;
use std::time::Duration;

use domain::entities::{DisplaySettings, WeatherSnapshot};
use domain::value_objects::UnitSystem;
use tokio_util::sync::CancellationToken;

use crate::client::MirrorApi;
use crate::poller::{Poller, run_every};
use crate::state::WidgetState;

/// Poll interval
pub const REFRESH: Duration = Duration::from_secs(10 * 60);

/// Current conditions and five-day forecast
pub struct WeatherWidget {
    api: Arc<dyn MirrorApi>,
    location: String,
    units: UnitSystem,
    poller: Poller<WeatherSnapshot>,
}

impl std::fmt::Debug for WeatherWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherWidget")
            .field("location", &self.location)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

impl WeatherWidget {
    pub fn new(api: Arc<dyn MirrorApi>, settings: &DisplaySettings) -> Self {
        Self {
            api,
            location: settings.location.clone(),
            units: settings.units,
            poller: Poller::new("weather"),
        }
    }

    pub const fn poller(&self) -> &Poller<WeatherSnapshot> {
        &self.poller
    }

    /// Start a fetch, superseding any in-flight one
    pub fn refresh(&self) {
        let api = Arc::clone(&self.api);
        let location = self.location.clone();
        let units = self.units;
        self.poller
            .start(async move { api.weather(&location, units).await });
    }

    pub async fn run(&self, token: &CancellationToken) {
        run_every(REFRESH, token, || self.refresh()).await;
        self.poller.stop();
    }

    pub fn render(&self) -> Vec<String> {
        self.poller.with_state(|state| render(state, self.units))
    }
}

fn render(state: &WidgetState<WeatherSnapshot>, units: UnitSystem) -> Vec<String> {
    let snapshot = match state {
        WidgetState::Loading => return vec!["Loading weather...".to_string()],
        WidgetState::Failed(_) => return vec!["Failed to load weather".to_string()],
        WidgetState::Ready(snapshot) => snapshot,
    };

    let temp = units.temperature_symbol();
    let mut lines = vec![
        format!(
            "{} {}{temp}  {}",
            snapshot.icon_kind().glyph(),
            snapshot.temperature,
            snapshot.description
        ),
        snapshot.location.clone(),
        format!(
            "Feels like {}{temp} · Humidity {}% · Wind {} {}",
            snapshot.feels_like,
            snapshot.humidity,
            snapshot.wind_speed.round(),
            units.speed_unit()
        ),
        format!(
            "UV {} · Visibility {} {}",
            snapshot.uv,
            snapshot.visibility,
            units.distance_unit()
        ),
    ];

    let forecast: Vec<String> = snapshot
        .forecast
        .iter()
        .map(|day| {
            format!(
                "{} {} {}°/{}°",
                day.day,
                day.icon_kind().glyph(),
                day.high,
                day.low
            )
        })
        .collect();
    if !forecast.is_empty() {
        lines.push(forecast.join("  "));
    }

    lines
}
