//! gaugetop settings.
//!
//! Everything is compiled in; nothing is read from disk or the environment.

use std::time::Duration;

use crate::ui::screen::MIN_LINE_BUDGET;

/// Runtime settings for one monitoring run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Refresh period
    pub tick_interval: Duration,
    /// Cells in a full-width gauge; paired core gauges get half each
    pub gauge_width: u32,
    /// Floor for the reserved display region
    pub min_line_budget: u16,
    /// How long `main` waits for the refresh loop after cancelling it
    pub grace_period: Duration,
    /// y/n answers accepted before giving up
    pub max_prompt_attempts: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(500),
            gauge_width: 50,
            min_line_budget: MIN_LINE_BUDGET,
            grace_period: Duration::from_millis(100),
            max_prompt_attempts: 10,
        }
    }
}
