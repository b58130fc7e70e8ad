//! Ports - boundaries to the hosting system
//!
//! The engine needs exactly one thing from its host at evaluation time: the
//! current time, to measure the voting window.

pub mod clock;

pub use self::clock::{Clock, FixedClock, SystemClock};
