//! Shared test doubles for the refresh loop.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use rust_decimal::Decimal;

use glance::fetcher::QuoteProvider;
use glance::models::{DisplayState, Instrument, PollMode};
use glance::scheduler::DisplaySink;
use glance::session::Clock;
use glance::{GlanceError, Result};

/// Builds a UTC instant from IST wall time.
pub fn ist(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    FixedOffset::east_opt(19_800)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
        .with_timezone(&Utc)
}

/// Monday 2024-06-03 11:00 IST, mid-session.
pub fn session_open() -> DateTime<Utc> {
    ist(2024, 6, 3, 11, 0, 0)
}

/// Monday 2024-06-03 18:00 IST, after the close.
pub fn session_closed() -> DateTime<Utc> {
    ist(2024, 6, 3, 18, 0, 0)
}

/// Canned answer for one symbol.
#[derive(Clone, Debug)]
pub enum Canned {
    Closes(Vec<Decimal>),
    Fail(&'static str),
    Panic,
}

/// In-memory provider answering from a symbol table.
#[derive(Clone, Default)]
pub struct MockProvider {
    answers: HashMap<&'static str, Canned>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn with(mut self, symbol: &'static str, answer: Canned) -> Self {
        self.answers.insert(symbol, answer);
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl QuoteProvider for MockProvider {
    async fn recent_closes(&self, symbol: &str) -> Result<Vec<Decimal>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answers.get(symbol) {
            Some(Canned::Closes(closes)) => Ok(closes.clone()),
            Some(Canned::Fail(reason)) => Err(GlanceError::MalformedResponse(reason.to_string())),
            Some(Canned::Panic) => panic!("provider exploded on {symbol}"),
            None => Err(GlanceError::MalformedResponse(format!(
                "unknown symbol {symbol}"
            ))),
        }
    }
}

/// Clock whose instant the test can move.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(now)))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Everything a [`RecordingSink`] has seen.
#[derive(Default, Debug)]
pub struct Recorded {
    pub renders: Vec<(Instrument, DisplayState)>,
    pub schedules: Vec<(PollMode, Duration)>,
}

impl Recorded {
    /// Latest state rendered for the instrument with this display name.
    pub fn latest(&self, name: &str) -> Option<&DisplayState> {
        self.renders
            .iter()
            .rev()
            .find(|(instrument, _)| instrument.display_name == name)
            .map(|(_, state)| state)
    }
}

/// Sink that records every call and optionally closes after N ticks.
#[derive(Clone, Default)]
pub struct RecordingSink {
    recorded: Arc<Mutex<Recorded>>,
    close_after_ticks: Option<usize>,
    panic_on_first_render: Arc<AtomicUsize>,
    fail_first_render: Arc<AtomicUsize>,
}

impl RecordingSink {
    pub fn closing_after(ticks: usize) -> Self {
        Self {
            close_after_ticks: Some(ticks),
            ..Self::default()
        }
    }

    /// Makes the very first `render` call panic.
    pub fn panicking_once(mut self) -> Self {
        self.panic_on_first_render = Arc::new(AtomicUsize::new(1));
        self
    }

    /// Makes the very first `render` call return an error other than
    /// [`GlanceError::SinkClosed`].
    pub fn failing_once(mut self) -> Self {
        self.fail_first_render = Arc::new(AtomicUsize::new(1));
        self
    }

    pub fn recorded(&self) -> Arc<Mutex<Recorded>> {
        Arc::clone(&self.recorded)
    }

    fn closed(&self) -> bool {
        let recorded = self.recorded.lock().unwrap();
        self.close_after_ticks
            .is_some_and(|limit| recorded.schedules.len() >= limit)
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, instrument: &Instrument, state: DisplayState) -> Result<()> {
        if self.panic_on_first_render.swap(0, Ordering::SeqCst) == 1 {
            panic!("display blew up");
        }
        if self.fail_first_render.swap(0, Ordering::SeqCst) == 1 {
            return Err(GlanceError::Io("display write failed".to_string()));
        }
        if self.closed() {
            return Err(GlanceError::SinkClosed);
        }
        self.recorded.lock().unwrap().renders.push((*instrument, state));
        Ok(())
    }

    fn schedule(&mut self, mode: PollMode, delay: Duration) -> Result<()> {
        if self.closed() {
            return Err(GlanceError::SinkClosed);
        }
        self.recorded.lock().unwrap().schedules.push((mode, delay));
        Ok(())
    }
}
