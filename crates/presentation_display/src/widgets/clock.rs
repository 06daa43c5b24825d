//! Clock widget

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::poller::run_every;

/// Recompute interval
pub const TICK: Duration = Duration::from_secs(1);

/// Rendered clock text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    /// `HH:MM`
    pub time: String,
    /// `Weekday, Month D, YYYY`
    pub date: String,
}

impl ClockView {
    pub fn at<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            time: now.format("%H:%M").to_string(),
            date: now.format("%A, %B %-d, %Y").to_string(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![self.time.clone(), self.date.clone()]
    }
}

/// Local-time clock, recomputed every second
#[derive(Debug)]
pub struct ClockWidget {
    tx: watch::Sender<ClockView>,
}

impl Default for ClockWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockWidget {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ClockView::at(&Local::now()));
        Self { tx }
    }

    pub fn view(&self) -> ClockView {
        self.tx.borrow().clone()
    }

    pub async fn run(&self, token: &CancellationToken) {
        run_every(TICK, token, || {
            self.tx.send_replace(ClockView::at(&Local::now()));
        })
        .await;
    }
}
