//! gaugetop — a minimal in-place terminal monitor.
//!
//! Polls memory, overall CPU and per-core CPU usage every 500 ms and redraws
//! them as bar gauges over the previous frame (cursor-up + clear-down, no
//! full-screen clears) until the foreground cancels the refresh loop.

pub mod config;
pub mod monitor;
pub mod prompt;
pub mod system;
pub mod ui;
