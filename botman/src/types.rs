//! Snapshot and chart types. The snapshot mirrors the JSON shape the dashboard consumes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One complete reading of the host. Memory and swap figures share one unit (MiB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub cpu: f32,
    pub used_memory: u64,
    pub available_memory: u64,
    pub total_memory: u64,
    pub used_swap: u64,
    pub total_swap: u64,
    pub core_count: u32,
}

impl MetricsSnapshot {
    /// Fixed reading served until a live feed exists.
    pub fn demo() -> Self {
        Self {
            cpu: 45.0,
            used_memory: 8192,
            available_memory: 16384,
            total_memory: 32768,
            used_swap: 1024,
            total_swap: 4096,
            core_count: 8,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.cpu.is_finite() || !(0.0..=100.0).contains(&self.cpu) {
            return Err(ValidationError::CpuOutOfRange(self.cpu));
        }
        if self.core_count == 0 {
            return Err(ValidationError::NoCores);
        }
        if self.used_memory > self.total_memory {
            return Err(ValidationError::Exceeds {
                field: "used_memory",
                value: self.used_memory,
                total: self.total_memory,
            });
        }
        if self.available_memory > self.total_memory {
            return Err(ValidationError::Exceeds {
                field: "available_memory",
                value: self.available_memory,
                total: self.total_memory,
            });
        }
        if self.used_swap > self.total_swap {
            return Err(ValidationError::Exceeds {
                field: "used_swap",
                value: self.used_swap,
                total: self.total_swap,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesEntry {
    pub label: &'static str,
    pub value: u64,
}

impl SeriesEntry {
    pub const fn new(label: &'static str, value: u64) -> Self {
        Self { label, value }
    }

    // Whole-number percentage used for slice labels; None when there is nothing to divide by.
    pub fn share_of(&self, total: u64) -> Option<u16> {
        if total == 0 {
            return None;
        }
        Some((self.value as f64 / total as f64 * 100.0).round() as u16)
    }
}

/// Used/available split for one chart, always in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSeries {
    pub used: SeriesEntry,
    pub available: SeriesEntry,
}

impl ChartSeries {
    pub fn entries(&self) -> [SeriesEntry; 2] {
        [self.used, self.available]
    }

    // Widened: each entry is only bounded by the total, so two large values can exceed u64.
    pub fn sum(&self) -> u128 {
        u128::from(self.used.value) + u128::from(self.available.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_snapshot_is_valid() {
        assert_eq!(MetricsSnapshot::demo().validate(), Ok(()));
    }

    #[test]
    fn rejects_used_memory_above_total() {
        let s = MetricsSnapshot {
            used_memory: 40_000,
            ..MetricsSnapshot::demo()
        };
        assert_eq!(
            s.validate(),
            Err(ValidationError::Exceeds {
                field: "used_memory",
                value: 40_000,
                total: 32768
            })
        );
    }

    #[test]
    fn rejects_swap_and_cpu_and_cores() {
        let swap = MetricsSnapshot {
            used_swap: 5000,
            ..MetricsSnapshot::demo()
        };
        assert!(matches!(
            swap.validate(),
            Err(ValidationError::Exceeds { field: "used_swap", .. })
        ));

        let cpu = MetricsSnapshot {
            cpu: f32::NAN,
            ..MetricsSnapshot::demo()
        };
        assert!(matches!(cpu.validate(), Err(ValidationError::CpuOutOfRange(_))));

        let cores = MetricsSnapshot {
            core_count: 0,
            ..MetricsSnapshot::demo()
        };
        assert_eq!(cores.validate(), Err(ValidationError::NoCores));
    }

    #[test]
    fn rejects_available_memory_above_total() {
        let s = MetricsSnapshot {
            available_memory: 40_000,
            ..MetricsSnapshot::demo()
        };
        assert!(matches!(
            s.validate(),
            Err(ValidationError::Exceeds { field: "available_memory", value: 40_000, .. })
        ));
    }

    #[test]
    fn rejects_cpu_outside_percent_range() {
        for cpu in [100.5, -1.0, f32::INFINITY] {
            let s = MetricsSnapshot {
                cpu,
                ..MetricsSnapshot::demo()
            };
            assert!(
                matches!(s.validate(), Err(ValidationError::CpuOutOfRange(_))),
                "cpu {cpu} accepted"
            );
        }
        for cpu in [0.0, 100.0] {
            let s = MetricsSnapshot {
                cpu,
                ..MetricsSnapshot::demo()
            };
            assert_eq!(s.validate(), Ok(()));
        }
    }

    #[test]
    fn sum_does_not_overflow_at_u64_max() {
        let s = MetricsSnapshot {
            used_memory: u64::MAX,
            available_memory: u64::MAX,
            total_memory: u64::MAX,
            ..MetricsSnapshot::demo()
        };
        assert_eq!(s.validate(), Ok(()));
        let series = ChartSeries {
            used: SeriesEntry::new("Used Memory", s.used_memory),
            available: SeriesEntry::new("Available Memory", s.available_memory),
        };
        assert_eq!(series.sum(), u128::from(u64::MAX) * 2);
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let js = r#"{"cpu":10,"used_memory":1,"available_memory":1,"total_memory":2,"used_swap":0,"core_count":1}"#;
        let err = serde_json::from_str::<MetricsSnapshot>(js).unwrap_err();
        assert!(err.to_string().contains("total_swap"), "{err}");
    }

    #[test]
    fn share_of_rounds_and_handles_zero() {
        let e = SeriesEntry::new("Used Memory", 8192);
        assert_eq!(e.share_of(32768), Some(25));
        assert_eq!(SeriesEntry::new("x", 1).share_of(3), Some(33));
        assert_eq!(e.share_of(0), None);
    }
}
