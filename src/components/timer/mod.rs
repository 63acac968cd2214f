//! Practice timers.
//!
//! - [`practice::Practice`] - count-up stopwatch
//! - [`countdown::Countdown`] - configurable countdown with optional
//!   auto-restart and rest rounds

mod countdown;
mod practice;

pub use countdown::Countdown;
pub use practice::Practice;
