//! gaugetop — memory and CPU gauges refreshed in place.
//!
//! Answer `y` to start monitoring, then press Enter to quit.

use std::io::{self, BufRead};
use std::thread;

use anyhow::{anyhow, Context, Result};
use tracing::warn;

use gaugetop::config::MonitorConfig;
use gaugetop::monitor::{cancellation, RefreshSession};
use gaugetop::prompt::{confirm, Confirmation};
use gaugetop::system::provider::SysinfoProvider;
use gaugetop::system::sampler::Sampler;
use gaugetop::ui::canvas::AnsiCanvas;
use gaugetop::ui::screen::{line_budget_for, Compositor};

fn main() -> Result<()> {
    let config = MonitorConfig::default();
    let stdin = io::stdin();

    match confirm(&mut stdin.lock(), &mut io::stdout(), config.max_prompt_attempts)? {
        Confirmation::Proceed => {}
        Confirmation::Declined => {
            println!("Program terminated.");
            return Ok(());
        }
        Confirmation::GaveUp => {
            println!("No valid answer given. Program terminated.");
            return Ok(());
        }
    }

    let mut canvas = AnsiCanvas::new(io::stdout());
    canvas.clear_screen().context("failed to clear terminal")?;

    let provider = SysinfoProvider::new();
    let line_budget = line_budget_for(provider.core_count(), config.min_line_budget);

    let (cancel, signal) = cancellation();
    let session = RefreshSession::new(
        config.tick_interval,
        config.gauge_width,
        Sampler::new(provider),
        Compositor::new(canvas, line_budget),
        signal,
    );
    let worker = thread::Builder::new()
        .name("refresh".into())
        .spawn(move || session.run())
        .context("failed to start refresh loop")?;

    // Any line (or end of input / read error) ends the run
    let mut line = String::new();
    if let Err(e) = stdin.lock().read_line(&mut line) {
        warn!(error = %e, "stdin read failed, stopping");
    }

    cancel.cancel();
    thread::sleep(config.grace_period);

    if worker.is_finished() {
        worker
            .join()
            .map_err(|_| anyhow!("refresh loop panicked"))?;
    } else {
        warn!("refresh loop still busy after grace period");
    }

    println!("Program terminated.");
    Ok(())
}
