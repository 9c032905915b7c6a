//! Event-loop driver for a [`QuizSession`].
//!
//! One periodic interval supplies the countdown ticks and one channel supplies
//! user commands. Both are polled from a single `select!` loop, so a tick and a
//! submit are never handled at the same time and the session needs no locking.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval_at, Instant};

use crate::events::Event;
use crate::session::{QuizResult, QuizSession};

const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// Calls a front end may make while a session runs.
#[derive(Debug)]
pub enum SessionCommand {
    Select { index: usize, option: String },
    Submit,
    /// Ask for a `StateSnapshot`, answered on `reply` rather than through
    /// the observer.
    Status { reply: oneshot::Sender<Event> },
}

/// Run `session` to completion.
///
/// Every event the session produces is handed to `observer` in order, plus a
/// `StateSnapshot` after each tick that leaves the session in progress. A
/// closed command channel counts as an explicit submit.
///
/// A zero `tick_period` is raised to one millisecond.
pub async fn run_session<F>(
    mut session: QuizSession,
    tick_period: Duration,
    mut commands: mpsc::Receiver<SessionCommand>,
    mut observer: F,
) -> QuizResult
where
    F: FnMut(&Event),
{
    let tick_period = tick_period.max(MIN_TICK_PERIOD);
    let mut ticks = interval_at(Instant::now() + tick_period, tick_period);

    loop {
        for event in session.drain_events() {
            observer(&event);
        }
        if let Some(result) = session.result() {
            return result;
        }

        tokio::select! {
            _ = ticks.tick() => {
                if session.tick().is_none() {
                    observer(&session.snapshot());
                }
            }
            command = commands.recv() => match command {
                Some(SessionCommand::Select { index, option }) => {
                    if let Err(e) = session.select(index, option) {
                        tracing::warn!(session_id = %session.id(), error = %e, "select command ignored");
                    }
                }
                Some(SessionCommand::Submit) => {
                    session.submit();
                }
                Some(SessionCommand::Status { reply }) => {
                    // The requester may have given up waiting.
                    let _ = reply.send(session.snapshot());
                }
                None => {
                    tracing::debug!(session_id = %session.id(), "command channel closed, submitting");
                    session.submit();
                }
            },
        }
    }
}
