/// Virtual memory usage as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemoryUsage {
    pub used_bytes: u64,
    pub total_bytes: u64,
    /// Precomputed by the provider, never re-derived from the byte counts
    pub used_percent: f64,
}

impl MemoryUsage {
    /// Build from raw byte counts. Returns `None` when the total is unknown (zero).
    pub fn from_bytes(used_bytes: u64, total_bytes: u64) -> Option<Self> {
        if total_bytes == 0 {
            return None;
        }
        Some(Self {
            used_bytes,
            total_bytes,
            used_percent: (used_bytes as f64 / total_bytes as f64) * 100.0,
        })
    }

    pub fn used_gib(&self) -> f64 {
        bytes_to_gib(self.used_bytes)
    }

    pub fn total_gib(&self) -> f64 {
        bytes_to_gib(self.total_bytes)
    }
}

/// Convert bytes to GiB (1024^3)
pub fn bytes_to_gib(bytes: u64) -> f64 {
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
    bytes as f64 / GIB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_from_bytes() {
        let mem = MemoryUsage::from_bytes(4 << 30, 16 << 30).unwrap();
        assert_eq!(mem.used_percent, 25.0);
        assert_eq!(mem.used_gib(), 4.0);
        assert_eq!(mem.total_gib(), 16.0);
    }

    #[test]
    fn zero_total_is_unknown() {
        assert!(MemoryUsage::from_bytes(0, 0).is_none());
    }
}
