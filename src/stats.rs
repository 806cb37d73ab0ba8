// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::sync::atomic::{
    AtomicU64,
    Ordering::Relaxed,
};

/// Per-list instrumentation. Only used for performance measurement, nothing
/// in the list reads these back to make decisions.
#[derive(Debug, Default)]
pub(crate) struct Stats {
    comparisons: AtomicU64,
}

impl Stats {
    #[inline]
    pub(crate) fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Relaxed);
    }

    pub(crate) fn comparisons(&self) -> u64 {
        self.comparisons.load(Relaxed)
    }

    pub(crate) fn reset(&self) {
        self.comparisons.store(0, Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::Stats;

    #[test]
    fn test_record_and_reset() {
        let stats = Stats::default();
        assert_eq!(stats.comparisons(), 0);

        for _ in 0..10 {
            stats.record_comparison();
        }
        assert_eq!(stats.comparisons(), 10);

        stats.reset();
        assert_eq!(stats.comparisons(), 0);
    }
}
