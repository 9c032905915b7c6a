pub mod config;
pub mod options;
pub mod play;
pub mod questions;
