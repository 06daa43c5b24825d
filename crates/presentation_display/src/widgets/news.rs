//! News widget
//!
//! Headlines are refetched every 30 minutes; independently, the shown
//! article advances every 10 seconds and wraps after the last one.

use std::sync::Arc;
use std::time::Duration;

use domain::entities::{DisplaySettings, NewsArticle};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::client::MirrorApi;
use crate::poller::{Poller, run_after, run_every};
use crate::state::WidgetState;

/// Poll interval
pub const REFRESH: Duration = Duration::from_secs(30 * 60);

/// Rotation interval
pub const ROTATE: Duration = Duration::from_secs(10);

/// Cyclic cursor over the fetched headlines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsRotation {
    articles: Vec<NewsArticle>,
    index: usize,
    capacity: usize,
}

impl NewsRotation {
    pub const fn new(capacity: usize) -> Self {
        Self {
            articles: Vec::new(),
            index: 0,
            capacity,
        }
    }

    /// Swap in a refreshed list, keeping the position modulo the new length
    pub fn replace(&mut self, mut articles: Vec<NewsArticle>) {
        articles.truncate(self.capacity);
        self.index = if articles.is_empty() {
            0
        } else {
            self.index % articles.len()
        };
        self.articles = articles;
    }

    pub fn advance(&mut self) {
        if !self.articles.is_empty() {
            self.index = (self.index + 1) % self.articles.len();
        }
    }

    pub fn current(&self) -> Option<&NewsArticle> {
        self.articles.get(self.index)
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Rotating headline ticker
pub struct NewsWidget {
    api: Arc<dyn MirrorApi>,
    category: String,
    country: String,
    poller: Poller<Vec<NewsArticle>>,
    rotation: Mutex<NewsRotation>,
}

impl std::fmt::Debug for NewsWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsWidget")
            .field("category", &self.category)
            .field("country", &self.country)
            .finish_non_exhaustive()
    }
}

impl NewsWidget {
    pub fn new(
        api: Arc<dyn MirrorApi>,
        settings: &DisplaySettings,
        country: &str,
        max_articles: usize,
    ) -> Self {
        Self {
            api,
            category: settings.primary_news_category().to_string(),
            country: country.to_string(),
            poller: Poller::new("news"),
            rotation: Mutex::new(NewsRotation::new(max_articles)),
        }
    }

    pub fn refresh(&self) {
        let api = Arc::clone(&self.api);
        let category = self.category.clone();
        let country = self.country.clone();
        self.poller
            .start(async move { api.news(&category, &country).await });
    }

    pub fn rotate(&self) {
        self.rotation.lock().advance();
    }

    pub fn rotation(&self) -> NewsRotation {
        self.rotation.lock().clone()
    }

    /// Feed every fetched list into the rotation
    async fn follow_updates(&self, token: &CancellationToken) {
        let mut rx = self.poller.subscribe();
        loop {
            tokio::select! {
                () = token.cancelled() => break,
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let fetched = rx.borrow_and_update().ready().cloned();
                    if let Some(articles) = fetched {
                        self.rotation.lock().replace(articles);
                    }
                }
            }
        }
    }

    pub async fn run(&self, token: &CancellationToken) {
        tokio::join!(
            self.follow_updates(token),
            run_every(REFRESH, token, || self.refresh()),
            run_after(ROTATE, token, || self.rotate()),
        );
        self.poller.stop();
    }

    pub fn render(&self) -> Vec<String> {
        let rotation = self.rotation.lock();
        self.poller.with_state(|state| render(state, &rotation))
    }
}

fn render<T>(state: &WidgetState<T>, rotation: &NewsRotation) -> Vec<String> {
    if state.is_loading() {
        return vec!["Loading news...".to_string()];
    }
    let article = match (state, rotation.current()) {
        (WidgetState::Ready(_), Some(article)) => article,
        _ => return vec!["No news available".to_string()],
    };

    let mut byline = article.source.clone();
    if let Some(date) = article.published_date() {
        byline.push_str(" · ");
        byline.push_str(&date);
    }
    byline.push_str(&format!("  ({}/{})", rotation.index() + 1, rotation.len()));

    let mut lines = vec![format!("📰 {}", article.title)];
    if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
    }
    lines.push(byline);
    lines
}
