//! Self-rearming refresh loop.
//!
//! [`Scheduler::tick`] refreshes every instrument, publishes the resulting
//! [`DisplayState`]s to a [`DisplaySink`], and returns the delay before the
//! next tick. [`Scheduler::run`] drives it: tick, sleep, repeat, with exactly
//! one tick in flight. The delay is picked from the session clock *after*
//! the tick has finished, so a slow tick that crosses the session boundary
//! still lands on the right cadence.
//!
//! Failures never stop the loop. A failing or panicking instrument becomes
//! [`DisplayState::Error`] for that instrument only; a failing or panicking
//! tick is logged and the timer is re-armed anyway. The loop ends only when
//! the sink reports [`GlanceError::SinkClosed`].

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;
use tracing::{debug, error, info, warn};

use crate::fetcher::{FetchError, QuoteProvider, fetch_recent_closes};
use crate::models::{DisplayState, Instrument, PollMode};
use crate::processor::display_state;
use crate::session::{Clock, is_session_open};
use crate::{GlanceError, Result};

/// Delay between ticks while the exchange is trading.
pub const FAST_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Delay between ticks outside the trading session.
pub const SLOW_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Consumer of per-instrument display updates.
///
/// Implementations must not block; the scheduler calls them inline.
pub trait DisplaySink {
    /// Replaces the displayed state of `instrument`.
    ///
    /// # Errors
    ///
    /// Returns [`GlanceError::SinkClosed`] once the display is gone.
    fn render(&mut self, instrument: &Instrument, state: DisplayState) -> Result<()>;

    /// Announces the cadence chosen after a tick.
    ///
    /// # Errors
    ///
    /// Returns [`GlanceError::SinkClosed`] once the display is gone.
    fn schedule(&mut self, _mode: PollMode, _delay: Duration) -> Result<()> {
        Ok(())
    }
}

/// Returns the poll mode and delay for the given session state.
pub fn poll_interval(session_open: bool) -> (PollMode, Duration) {
    if session_open {
        (PollMode::FastPoll, FAST_POLL_INTERVAL)
    } else {
        (PollMode::SlowPoll, SLOW_POLL_INTERVAL)
    }
}

/// Refresh state machine over a fixed instrument list.
pub struct Scheduler<P, C, S> {
    instruments: Vec<Instrument>,
    provider: P,
    clock: C,
    sink: S,
    mode: Option<PollMode>,
}

impl<P, C, S> Scheduler<P, C, S>
where
    P: QuoteProvider,
    C: Clock,
    S: DisplaySink,
{
    /// Creates a scheduler. No tick runs until [`tick`](Self::tick) or
    /// [`run`](Self::run) is called.
    #[must_use]
    pub fn new(instruments: impl Into<Vec<Instrument>>, provider: P, clock: C, sink: S) -> Self {
        Self {
            instruments: instruments.into(),
            provider,
            clock,
            sink,
            mode: None,
        }
    }

    /// Cadence chosen by the last tick, `None` before the first.
    pub fn mode(&self) -> Option<PollMode> {
        self.mode
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Fetches and formats one instrument, folding every failure into the
    /// returned state.
    pub async fn refresh(&self, instrument: &Instrument) -> DisplayState {
        let closes = match fetch_recent_closes(&self.provider, instrument.symbol_id).await {
            Ok(closes) => closes,
            Err(FetchError::NoData { observations }) => {
                debug!(
                    instrument = instrument.display_name,
                    observations, "not enough closes for a quote"
                );
                return DisplayState::NoData;
            }
            Err(FetchError::Failure(e)) => {
                warn!(instrument = instrument.display_name, error = %e, "fetch failed");
                return DisplayState::Error;
            }
        };

        display_state(closes).unwrap_or_else(|e| {
            warn!(instrument = instrument.display_name, error = %e, "quote computation failed");
            DisplayState::Error
        })
    }

    /// Runs one refresh cycle and returns the delay before the next one.
    ///
    /// # Errors
    ///
    /// Returns [`GlanceError::SinkClosed`] if the display went away.
    pub async fn tick(&mut self) -> Result<Duration> {
        let mut batch = Vec::with_capacity(self.instruments.len());

        for instrument in &self.instruments {
            let state = match AssertUnwindSafe(self.refresh(instrument))
                .catch_unwind()
                .await
            {
                Ok(state) => state,
                Err(payload) => {
                    error!(
                        instrument = instrument.display_name,
                        cause = panic_message(payload.as_ref()),
                        "instrument refresh panicked"
                    );
                    DisplayState::Error
                }
            };
            batch.push((*instrument, state));
        }

        for (instrument, state) in batch {
            self.sink.render(&instrument, state)?;
        }

        let (mode, delay) = self.next_interval();
        self.sink.schedule(mode, delay)?;

        Ok(delay)
    }

    /// Ticks forever, sleeping between ticks, until the sink closes.
    pub async fn run(mut self) {
        info!(
            instruments = self.instruments.len(),
            "refresh scheduler started"
        );

        loop {
            let outcome = AssertUnwindSafe(self.tick()).catch_unwind().await;

            let delay = match outcome {
                Ok(Ok(delay)) => delay,
                Ok(Err(GlanceError::SinkClosed)) => {
                    info!("display closed, refresh scheduler stopping");
                    return;
                }
                Ok(Err(e)) => {
                    error!(error = %e, "tick failed");
                    self.next_interval().1
                }
                Err(payload) => {
                    error!(cause = panic_message(payload.as_ref()), "tick panicked");
                    self.next_interval().1
                }
            };

            tokio::time::sleep(delay).await;
        }
    }

    /// Reads the clock now and records the resulting cadence.
    fn next_interval(&mut self) -> (PollMode, Duration) {
        let (mode, delay) = poll_interval(is_session_open(&self.clock.now()));

        if self.mode != Some(mode) {
            info!(
                mode = mode.label(),
                delay_ms = delay.as_millis() as u64,
                "poll mode changed"
            );
            self.mode = Some(mode);
        }

        (mode, delay)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
