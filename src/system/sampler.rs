use anyhow::Error;
use tracing::debug;

use crate::system::memory::MemoryUsage;
use crate::system::provider::UtilizationProvider;

/// One tick's worth of utilization figures.
///
/// A `None` field means the provider failed for that metric this tick; the
/// matching gauge is left out of the frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtilizationSample {
    pub memory: Option<MemoryUsage>,
    pub cpu_overall: Option<f64>,
    /// Index is the core id, in provider order
    pub cpu_per_core: Option<Vec<f64>>,
}

/// Queries a provider once per tick
pub struct Sampler<P> {
    provider: P,
}

impl<P: UtilizationProvider> Sampler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Take a sample. Never fails: a metric the provider can't supply this
    /// time is simply absent and will be asked for again next tick.
    pub fn sample(&mut self) -> UtilizationSample {
        UtilizationSample {
            memory: self.provider.virtual_memory().map_err(omitted("memory")).ok(),
            cpu_overall: self.provider.cpu_overall().map_err(omitted("cpu overall")).ok(),
            cpu_per_core: self.provider.cpu_per_core().map_err(omitted("cpu per core")).ok(),
        }
    }
}

fn omitted(metric: &'static str) -> impl Fn(Error) {
    move |err| debug!(metric, error = %err, "sample unavailable, gauge omitted this tick")
}
