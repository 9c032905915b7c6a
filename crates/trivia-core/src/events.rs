use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::{SessionState, SubmitTrigger};
use crate::timer::TimerState;

/// Every state change in a session produces an Event.
/// The rendering layer drains them from the session or asks for a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionStarted {
        session_id: Uuid,
        question_count: usize,
        time_limit_secs: u64,
        at: DateTime<Utc>,
    },
    AnswerSelected {
        session_id: Uuid,
        index: usize,
        option: String,
        at: DateTime<Utc>,
    },
    TimerStarted {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Timer halted before reaching zero.
    TimerStopped {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. Fired at most once per timer.
    TimerExpired {
        at: DateTime<Utc>,
    },
    SessionFinished {
        session_id: Uuid,
        score: usize,
        total: usize,
        trigger: SubmitTrigger,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        session_id: Uuid,
        state: SessionState,
        timer_state: TimerState,
        remaining_secs: u64,
        total_secs: u64,
        answered: usize,
        question_count: usize,
        score: Option<usize>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Snake-case name of the variant, as written in the `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::SessionStarted { .. } => "session_started",
            Event::AnswerSelected { .. } => "answer_selected",
            Event::TimerStarted { .. } => "timer_started",
            Event::TimerStopped { .. } => "timer_stopped",
            Event::TimerExpired { .. } => "timer_expired",
            Event::SessionFinished { .. } => "session_finished",
            Event::StateSnapshot { .. } => "state_snapshot",
        }
    }
}
