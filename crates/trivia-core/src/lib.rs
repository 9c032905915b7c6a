//! # Trivia Core Library
//!
//! Core logic for a timed multiple-choice quiz. The CLI in `trivia-cli` is a
//! thin front end over this crate.
//!
//! ## Architecture
//!
//! - **Question bank**: an immutable, ordered list of questions injected into
//!   each session
//! - **Countdown timer**: a tick-driven state machine; the caller supplies the
//!   ticks
//! - **Quiz session**: tracks selections, auto-submits on expiry and scores
//!   exactly once
//! - **Runner**: a single-threaded `tokio` loop that feeds ticks and user
//!   commands into a session
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`QuizSession`]: Session state machine
//! - [`CountdownTimer`]: Countdown state machine
//! - [`QuestionBank`]: Question set
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod options;
pub mod question;
pub mod runner;
pub mod selection;
pub mod session;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use options::{Category, Difficulty, GameOptions, QuestionType};
pub use question::{Question, QuestionBank};
pub use runner::{run_session, SessionCommand};
pub use selection::SelectionStore;
pub use session::{QuestionReview, QuizResult, QuizSession, SessionState, SubmitTrigger};
pub use storage::Config;
pub use timer::{CountdownTimer, TimerState};
