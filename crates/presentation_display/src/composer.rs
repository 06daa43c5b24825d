//! Display composer
//!
//! Arranges the widgets into one frame: clock and weather side by side at
//! the top, news in the middle, notes at the bottom. Visibility comes from
//! the [`DisplaySettings`] passed in at construction; hidden widgets are
//! neither rendered nor polled.

use std::sync::Arc;

use domain::entities::DisplaySettings;
use domain::value_objects::OwnerId;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::client::MirrorApi;
use crate::command::Command;
use crate::widgets::{ClockWidget, NewsWidget, NotesError, NotesWidget, WeatherWidget};

/// Width of the left column in the top band
const LEFT_COLUMN: usize = 32;

/// Non-settings inputs for building the widgets
#[derive(Debug, Clone)]
pub struct ComposerOptions {
    pub owner: OwnerId,
    pub max_notes: usize,
    pub max_articles: usize,
    pub news_country: String,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            owner: OwnerId::default(),
            max_notes: 5,
            max_articles: 5,
            news_country: "us".to_string(),
        }
    }
}

/// Rendered widget output, `None` for hidden widgets
#[derive(Debug, Default)]
pub struct Sections {
    pub clock: Option<Vec<String>>,
    pub weather: Option<Vec<String>>,
    pub news: Option<Vec<String>>,
    pub notes: Option<Vec<String>>,
}

/// Owns every widget and renders frames
#[derive(Debug)]
pub struct Composer {
    settings: DisplaySettings,
    clock: ClockWidget,
    weather: WeatherWidget,
    news: NewsWidget,
    notes: NotesWidget,
}

impl Composer {
    pub fn new(
        settings: DisplaySettings,
        api: Arc<dyn MirrorApi>,
        options: ComposerOptions,
    ) -> Self {
        Self {
            clock: ClockWidget::new(),
            weather: WeatherWidget::new(Arc::clone(&api), &settings),
            news: NewsWidget::new(
                Arc::clone(&api),
                &settings,
                &options.news_country,
                options.max_articles,
            ),
            notes: NotesWidget::new(api, options.owner, options.max_notes),
            settings,
        }
    }

    pub const fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub const fn notes(&self) -> &NotesWidget {
        &self.notes
    }

    /// Drive every visible widget until `token` is cancelled
    pub async fn run(&self, token: &CancellationToken) {
        let s = &self.settings;
        info!(
            clock = s.show_clock,
            weather = s.show_weather,
            news = s.show_news,
            notes = s.show_notes,
            "Starting widgets"
        );

        if s.show_notes {
            self.notes.load();
        }

        tokio::join!(
            async {
                if s.show_clock {
                    self.clock.run(token).await;
                }
            },
            async {
                if s.show_weather {
                    self.weather.run(token).await;
                }
            },
            async {
                if s.show_news {
                    self.news.run(token).await;
                }
            },
            token.cancelled(),
        );

        self.notes.poller().stop();
    }

    /// Apply a user command; `Quit` is left to the caller
    pub async fn handle(&self, command: Command) -> Result<(), NotesError> {
        match command {
            Command::Add(text) => {
                self.notes.add(&text).await?;
            },
            Command::Done(n) => self.notes.complete(n).await?,
            Command::Undo(n) => self.notes.reopen(n).await?,
            Command::Owner(owner) => self.notes.set_owner(OwnerId::new(owner)),
            Command::Quit => {},
        }
        Ok(())
    }

    pub fn sections(&self) -> Sections {
        let s = &self.settings;
        Sections {
            clock: s.show_clock.then(|| self.clock.view().lines()),
            weather: s.show_weather.then(|| self.weather.render()),
            news: s.show_news.then(|| self.news.render()),
            notes: s.show_notes.then(|| self.notes.render()),
        }
    }

    pub fn render(&self) -> String {
        compose(&self.settings, &self.sections())
    }
}

fn side_by_side(left: &[String], right: &[String]) -> Vec<String> {
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let l = left.get(i).map_or("", String::as_str);
            let r = right.get(i).map_or("", String::as_str);
            if r.is_empty() {
                l.to_string()
            } else {
                let pad = LEFT_COLUMN.saturating_sub(l.chars().count()).max(1);
                format!("{l}{}{r}", " ".repeat(pad))
            }
        })
        .collect()
}

/// Lay sections out into a frame
pub fn compose(settings: &DisplaySettings, sections: &Sections) -> String {
    let mut blocks: Vec<Vec<String>> = Vec::new();

    let top = match (&sections.clock, &sections.weather) {
        (Some(clock), Some(weather)) => side_by_side(clock, weather),
        (Some(only), None) | (None, Some(only)) => only.clone(),
        (None, None) => Vec::new(),
    };
    if !top.is_empty() {
        blocks.push(top);
    }
    if let Some(news) = &sections.news {
        blocks.push(news.clone());
    }
    if let Some(notes) = &sections.notes {
        blocks.push(notes.clone());
    }
    blocks.push(vec![format!(
        "☼ {}%",
        settings.display_brightness.percent()
    )]);

    blocks
        .iter()
        .map(|block| block.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
