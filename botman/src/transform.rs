//! Derives the chart series shown in the memory and swap panels.

use crate::error::ValidationError;
use crate::types::{ChartSeries, MetricsSnapshot, SeriesEntry};

pub fn derive_memory_series(s: &MetricsSnapshot) -> Result<ChartSeries, ValidationError> {
    s.validate()?;
    Ok(ChartSeries {
        used: SeriesEntry::new("Used Memory", s.used_memory),
        available: SeriesEntry::new("Available Memory", s.available_memory),
    })
}

// Available swap is not reported, so it is derived from the total.
pub fn derive_swap_series(s: &MetricsSnapshot) -> Result<ChartSeries, ValidationError> {
    s.validate()?;
    Ok(ChartSeries {
        used: SeriesEntry::new("Used Swap", s.used_swap),
        available: SeriesEntry::new("Available Swap", s.total_swap - s.used_swap),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(used: u64, spare: u64, used_swap: u64, total_swap: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            cpu: 12.5,
            used_memory: used,
            available_memory: spare,
            total_memory: used + spare,
            used_swap,
            total_swap,
            core_count: 4,
        }
    }

    #[test]
    fn demo_scenario_series() {
        let s = MetricsSnapshot::demo();
        let mem = derive_memory_series(&s).unwrap();
        assert_eq!(
            mem.entries(),
            [
                SeriesEntry::new("Used Memory", 8192),
                SeriesEntry::new("Available Memory", 16384)
            ]
        );
        let swap = derive_swap_series(&s).unwrap();
        assert_eq!(
            swap.entries(),
            [
                SeriesEntry::new("Used Swap", 1024),
                SeriesEntry::new("Available Swap", 3072)
            ]
        );
    }

    #[test]
    fn series_sum_to_totals() {
        let cases = [(0, 0, 0, 0), (1, 0, 1, 1), (0, 7, 0, 9), (8192, 24576, 4096, 4096), (3, 5, 2, 11)];
        for (used, spare, used_swap, total_swap) in cases {
            let s = snapshot(used, spare, used_swap, total_swap);
            assert_eq!(derive_memory_series(&s).unwrap().sum(), u128::from(s.total_memory));
            assert_eq!(derive_swap_series(&s).unwrap().sum(), u128::from(s.total_swap));
        }
    }

    #[test]
    fn huge_memory_figures_sum_without_overflow() {
        let s = MetricsSnapshot {
            used_memory: u64::MAX,
            available_memory: u64::MAX,
            total_memory: u64::MAX,
            ..MetricsSnapshot::demo()
        };
        let mem = derive_memory_series(&s).unwrap();
        assert_eq!(mem.sum(), u128::from(u64::MAX) * 2);
    }

    #[test]
    fn transform_is_idempotent() {
        let s = MetricsSnapshot::demo();
        assert_eq!(derive_memory_series(&s), derive_memory_series(&s));
        assert_eq!(derive_swap_series(&s), derive_swap_series(&s));
    }

    #[test]
    fn inconsistent_swap_is_rejected() {
        let s = snapshot(1, 1, 10, 4);
        assert!(matches!(
            derive_swap_series(&s),
            Err(ValidationError::Exceeds { field: "used_swap", .. })
        ));
        assert!(derive_memory_series(&s).is_err());
    }
}
