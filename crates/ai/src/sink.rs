//! Insight log: the append-only audit trail of AI decisions.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::insight::AiInsight;

/// Destination for AI insights.
///
/// Sinks never mutate or drop insights once recorded.
pub trait InsightSink: Send + Sync {
    fn record(&self, insight: AiInsight);

    /// Snapshot of everything recorded so far, in recording order.
    fn history(&self) -> Vec<AiInsight>;
}

impl<S> InsightSink for Arc<S>
where
    S: InsightSink + ?Sized,
{
    fn record(&self, insight: AiInsight) {
        (**self).record(insight)
    }

    fn history(&self) -> Vec<AiInsight> {
        (**self).history()
    }
}

/// In-memory insight log (`Mutex<Vec<_>>`).
///
/// Concurrent appends never interleave; order is completion order.
#[derive(Debug, Default)]
pub struct InsightLog {
    inner: Mutex<Vec<AiInsight>>,
}

impl InsightLog {
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are append-only, so a poisoned guard still holds a valid log.
    fn entries(&self) -> MutexGuard<'_, Vec<AiInsight>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl InsightSink for InsightLog {
    fn record(&self, insight: AiInsight) {
        self.entries().push(insight);
    }

    fn history(&self) -> Vec<AiInsight> {
        self.entries().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::InsightCategory;
    use std::thread;

    fn test_insight(category: InsightCategory, title: &str) -> AiInsight {
        AiInsight::new(category, title, "description", 0.5)
    }

    #[test]
    fn history_preserves_recording_order() {
        let log = InsightLog::new();
        log.record(test_insight(InsightCategory::RentalPricing, "first"));
        log.record(test_insight(InsightCategory::MaintenancePrediction, "second"));

        let titles: Vec<_> = log.history().iter().map(|i| i.title().to_string()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn history_is_a_snapshot() {
        let log = InsightLog::new();
        log.record(test_insight(InsightCategory::RiskAssessment, "a"));
        let snapshot = log.history();
        log.record(test_insight(InsightCategory::RiskAssessment, "b"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let log = Arc::new(InsightLog::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for i in 0..25 {
                        log.record(test_insight(InsightCategory::TenantScreening, &format!("{n}-{i}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(log.len(), 200);
    }
}
