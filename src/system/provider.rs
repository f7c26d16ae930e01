//! Utilization providers.
//!
//! The refresh loop only sees the [`UtilizationProvider`] trait. The binary
//! uses [`SysinfoProvider`]; tests plug in scripted fakes.

use std::time::Instant;

use anyhow::{bail, Result};
use sysinfo::{System, MINIMUM_CPU_UPDATE_INTERVAL};

use crate::system::memory::MemoryUsage;

/// Source of host CPU and memory figures.
///
/// Each call may fail independently; a failure only affects the metric it
/// was asked for. CPU percents are measured against the previous call, the
/// provider owns that baseline.
pub trait UtilizationProvider {
    fn virtual_memory(&mut self) -> Result<MemoryUsage>;
    fn cpu_overall(&mut self) -> Result<f64>;
    fn cpu_per_core(&mut self) -> Result<Vec<f64>>;
}

impl<P: UtilizationProvider + ?Sized> UtilizationProvider for Box<P> {
    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        (**self).virtual_memory()
    }

    fn cpu_overall(&mut self) -> Result<f64> {
        (**self).cpu_overall()
    }

    fn cpu_per_core(&mut self) -> Result<Vec<f64>> {
        (**self).cpu_per_core()
    }
}

/// Provider backed by the `sysinfo` crate
pub struct SysinfoProvider {
    sys: System,
    /// When CPU usage was last refreshed; overall and per-core reads of one
    /// tick share a single refresh.
    cpu_refreshed_at: Instant,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Baseline for the first delta
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        Self {
            sys,
            cpu_refreshed_at: Instant::now(),
        }
    }

    /// Number of logical cores, used to size the display region
    pub fn core_count(&self) -> usize {
        self.sys.cpus().len()
    }

    fn refresh_cpu(&mut self) {
        if self.cpu_refreshed_at.elapsed() >= MINIMUM_CPU_UPDATE_INTERVAL {
            self.sys.refresh_cpu_usage();
            self.cpu_refreshed_at = Instant::now();
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl UtilizationProvider for SysinfoProvider {
    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        self.sys.refresh_memory();
        match MemoryUsage::from_bytes(self.sys.used_memory(), self.sys.total_memory()) {
            Some(mem) => Ok(mem),
            None => bail!("total memory not reported"),
        }
    }

    fn cpu_overall(&mut self) -> Result<f64> {
        self.refresh_cpu();
        if self.sys.cpus().is_empty() {
            bail!("no CPUs reported");
        }
        Ok(self.sys.global_cpu_usage() as f64)
    }

    fn cpu_per_core(&mut self) -> Result<Vec<f64>> {
        self.refresh_cpu();
        let cores: Vec<f64> = self
            .sys
            .cpus()
            .iter()
            .map(|cpu| cpu.cpu_usage() as f64)
            .collect();
        if cores.is_empty() {
            bail!("no per-core CPU usage reported");
        }
        Ok(cores)
    }
}
