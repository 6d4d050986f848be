//! Unified event bus.
//!
//! Terminal input, timer ticks, and in-flight request completions are
//! normalized into one `AppEvent` enum delivered over a tokio unbounded
//! channel; the main loop draws once per received event.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use revbot_api::ApiError;
use revbot_shared::models::review::{AutoFixResponse, ReviewResponse};
use tokio::sync::mpsc;
use tokio::time::interval;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Logic tick (spinner animation, notification expiry).
    Tick,
    /// Completion of a fire-and-forget review request.
    ReviewFinished(Result<ReviewResponse, ApiError>),
    /// Completion of a fire-and-forget auto-fix request.
    AutoFixFinished(Result<AutoFixResponse, ApiError>),
}

/// Spawn the task that feeds terminal input and ticks into the channel.
///
/// Runs until the receiver is dropped. Only `Press` key events are forwarded;
/// Windows synthesizes release events for every keystroke.
pub fn spawn_input_task(tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut tick_interval = interval(Duration::from_millis(200));
        let mut reader = EventStream::new();

        loop {
            let tick = tick_interval.tick();
            let crossterm_event = reader.next().fuse();

            tokio::select! {
                _ = tick => {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
                maybe_event = crossterm_event => {
                    let forwarded = match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            tx.send(AppEvent::Key(key))
                        }
                        Some(Ok(Event::Resize(w, h))) => tx.send(AppEvent::Resize(w, h)),
                        Some(Ok(_)) => Ok(()),
                        _ => break,
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }
            }
        }
    });
}
