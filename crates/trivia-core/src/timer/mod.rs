mod countdown;

pub use countdown::{CountdownTimer, TimerState, DEFAULT_TIME_LIMIT_SECS};
