//! Quiz session state machine.
//!
//! A session owns its question bank, the user's selections and the countdown.
//! It starts `InProgress` and moves to `Finished` exactly once, either on an
//! explicit [`QuizSession::submit`] or when a [`QuizSession::tick`] drains the
//! countdown. Whichever comes first scores the session; the other is a no-op.
//!
//! ```text
//! InProgress --submit()--> Finished
//! InProgress --tick() reaches 0--> Finished
//! ```
//!
//! All mutation goes through `&mut self`, so the transition is serialized by
//! ownership. Drive a session from one event loop (see [`crate::runner`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::events::Event;
use crate::question::QuestionBank;
use crate::selection::SelectionStore;
use crate::timer::CountdownTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    InProgress,
    Finished,
}

/// What finished a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitTrigger {
    /// Explicit submit from the user.
    User,
    /// Auto-submit after the countdown expired.
    Expiry,
}

/// Per-question outcome shown after a session finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionReview {
    pub index: usize,
    pub text: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Final outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub session_id: Uuid,
    pub score: usize,
    pub total: usize,
    pub answered: usize,
    pub trigger: SubmitTrigger,
    pub elapsed_secs: u64,
    pub review: Vec<QuestionReview>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    bank: QuestionBank,
    selections: SelectionStore,
    timer: CountdownTimer,
    state: SessionState,
    score: Option<usize>,
    trigger: Option<SubmitTrigger>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    outbox: Vec<Event>,
}

impl QuizSession {
    /// Create a session over `bank` and start its countdown.
    ///
    /// A zero-second limit finishes the session immediately by expiry.
    pub fn new(bank: QuestionBank, time_limit_secs: u64) -> Self {
        let id = Uuid::new_v4();
        for index in bank.authoring_issues() {
            tracing::warn!(
                session_id = %id,
                index,
                "question's correct answer is not among its options"
            );
        }

        let mut session = Self {
            id,
            selections: SelectionStore::new(bank.len()),
            bank,
            timer: CountdownTimer::new(time_limit_secs),
            state: SessionState::InProgress,
            score: None,
            trigger: None,
            started_at: Utc::now(),
            finished_at: None,
            outbox: Vec::new(),
        };
        session.outbox.push(Event::SessionStarted {
            session_id: id,
            question_count: session.bank.len(),
            time_limit_secs,
            at: session.started_at,
        });
        tracing::debug!(
            session_id = %id,
            questions = session.bank.len(),
            time_limit_secs,
            "session started"
        );

        match session.timer.start() {
            Some(expired @ Event::TimerExpired { .. }) => {
                session.outbox.push(expired);
                session.finish(SubmitTrigger::Expiry);
            }
            Some(event) => session.outbox.push(event),
            None => {}
        }
        session
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Absent until the session finishes, then fixed.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn trigger(&self) -> Option<SubmitTrigger> {
        self.trigger
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn remaining_secs(&self) -> u64 {
        self.timer.remaining_secs()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] if `index` is outside the bank.
    pub fn answer_at(&self, index: usize) -> Result<Option<&str>, ValidationError> {
        self.selections.answer_at(index)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            session_id: self.id,
            state: self.state,
            timer_state: self.timer.state(),
            remaining_secs: self.timer.remaining_secs(),
            total_secs: self.timer.initial_secs(),
            answered: self.selections.answered_count(),
            question_count: self.bank.len(),
            score: self.score,
            at: Utc::now(),
        }
    }

    /// Score and per-question review, once finished.
    pub fn result(&self) -> Option<QuizResult> {
        let score = self.score?;
        let trigger = self.trigger?;
        let review = self
            .bank
            .iter()
            .zip(self.selections.iter())
            .enumerate()
            .map(|(index, (question, selected))| QuestionReview {
                index,
                text: question.text.clone(),
                selected: selected.map(str::to_string),
                correct_answer: question.correct_answer.clone(),
                is_correct: selected.is_some_and(|s| question.is_correct(s)),
            })
            .collect();
        Some(QuizResult {
            session_id: self.id,
            score,
            total: self.bank.len(),
            answered: self.selections.answered_count(),
            trigger,
            elapsed_secs: self.timer.elapsed_secs(),
            review,
        })
    }

    /// Take every event produced since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record an answer. Ignored once the session has finished.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfBounds`] if `index` is outside the bank
    /// while the session is in progress.
    pub fn select(&mut self, index: usize, option: impl Into<String>) -> Result<(), ValidationError> {
        if self.is_finished() {
            tracing::debug!(session_id = %self.id, index, "select ignored: session finished");
            return Ok(());
        }
        let option = option.into();
        self.selections.select(index, option.clone())?;
        self.outbox.push(Event::AnswerSelected {
            session_id: self.id,
            index,
            option,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Finish the session and return its score. Repeat calls return the
    /// stored score without further effect.
    pub fn submit(&mut self) -> usize {
        self.finish(SubmitTrigger::User)
    }

    /// Advance the countdown one period.
    ///
    /// Returns `Some(Event::SessionFinished)` on the tick that auto-submits.
    pub fn tick(&mut self) -> Option<Event> {
        if self.is_finished() {
            return None;
        }
        let expired = self.timer.tick()?;
        self.outbox.push(expired);
        tracing::info!(session_id = %self.id, "countdown expired, auto-submitting");
        self.finish(SubmitTrigger::Expiry);
        self.outbox.last().cloned()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn finish(&mut self, trigger: SubmitTrigger) -> usize {
        if let Some(score) = self.score {
            return score;
        }
        if let Some(stopped) = self.timer.stop() {
            self.outbox.push(stopped);
        }

        let score = self.compute_score();
        let at = Utc::now();
        self.state = SessionState::Finished;
        self.score = Some(score);
        self.trigger = Some(trigger);
        self.finished_at = Some(at);

        tracing::info!(
            session_id = %self.id,
            score,
            total = self.bank.len(),
            ?trigger,
            "session finished"
        );
        self.outbox.push(Event::SessionFinished {
            session_id: self.id,
            score,
            total: self.bank.len(),
            trigger,
            at,
        });
        score
    }

    fn compute_score(&self) -> usize {
        self.bank
            .iter()
            .zip(self.selections.iter())
            .filter(|(question, selected)| selected.is_some_and(|s| question.is_correct(s)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Question;
    use crate::timer::TimerState;

    fn three_questions() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new("2+2?", ["3", "4"], "4"),
            Question::new("Red planet?", ["Mars", "Venus"], "Mars"),
            Question::new("H2O is?", ["Water", "Salt"], "Water"),
        ])
    }

    #[test]
    fn new_session_is_in_progress_with_running_timer() {
        let session = QuizSession::new(three_questions(), 60);
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.score(), None);
        assert!(session.result().is_none());
        assert_eq!(session.timer().state(), TimerState::Running);
        assert_eq!(session.remaining_secs(), 60);
    }

    #[test]
    fn submit_scores_and_stops_timer() {
        let mut session = QuizSession::new(three_questions(), 60);
        session.select(0, "4").unwrap();
        session.select(1, "Venus").unwrap();
        session.select(2, "Water").unwrap();
        assert_eq!(session.submit(), 2);
        assert_eq!(session.state(), SessionState::Finished);
        assert_eq!(session.trigger(), Some(SubmitTrigger::User));
        assert_eq!(session.timer().state(), TimerState::Stopped);
        assert!(session.tick().is_none());
        assert_eq!(session.remaining_secs(), 60);
    }

    #[test]
    fn select_after_finish_is_ignored() {
        let mut session = QuizSession::new(three_questions(), 60);
        session.select(0, "3").unwrap();
        session.submit();
        session.drain_events();

        assert!(session.select(0, "4").is_ok());
        assert!(session.select(99, "4").is_ok());
        assert_eq!(session.answer_at(0), Ok(Some("3")));
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn events_record_lifecycle() {
        let mut session = QuizSession::new(three_questions(), 2);
        session.select(1, "Mars").unwrap();
        assert!(session.tick().is_none());
        let finished = session.tick();
        assert!(matches!(
            finished,
            Some(Event::SessionFinished { score: 1, trigger: SubmitTrigger::Expiry, .. })
        ));

        let kinds: Vec<_> = session.drain_events().iter().map(Event::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "session_started",
                "timer_started",
                "answer_selected",
                "timer_expired",
                "session_finished",
            ]
        );
    }

    #[test]
    fn result_includes_review() {
        let mut session = QuizSession::new(three_questions(), 60);
        session.select(0, "4").unwrap();
        session.select(1, "Venus").unwrap();
        session.submit();

        let result = session.result().unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 3);
        assert_eq!(result.answered, 2);
        assert!(result.review[0].is_correct);
        assert!(!result.review[1].is_correct);
        assert_eq!(result.review[2].selected, None);
        assert_eq!(result.review[2].correct_answer, "Water");
    }

    #[test]
    fn zero_time_limit_finishes_immediately() {
        let session = QuizSession::new(three_questions(), 0);
        assert!(session.is_finished());
        assert_eq!(session.score(), Some(0));
        assert_eq!(session.trigger(), Some(SubmitTrigger::Expiry));
    }

    #[test]
    fn snapshot_reflects_progress() {
        let mut session = QuizSession::new(three_questions(), 30);
        session.select(2, "Salt").unwrap();
        session.tick();
        match session.snapshot() {
            Event::StateSnapshot {
                state,
                remaining_secs,
                total_secs,
                answered,
                question_count,
                score,
                ..
            } => {
                assert_eq!(state, SessionState::InProgress);
                assert_eq!(remaining_secs, 29);
                assert_eq!(total_secs, 30);
                assert_eq!(answered, 1);
                assert_eq!(question_count, 3);
                assert_eq!(score, None);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
