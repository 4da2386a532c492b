use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Resource bounds for one search call. Every bound is optional; with none
/// set the search runs until it finds a goal or exhausts the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
    pub time_limit: Option<Duration>,
    pub memory_limit_mb: Option<usize>,
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            max_expansions = limits.max_expansions,
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = limits.memory_limit_mb,
        );
        let mut condition = Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        };
        if limits.memory_limit_mb.is_some() {
            condition.record_memory_usage();
        }
        condition
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn record_memory_usage(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.record_memory_usage();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Checked once per frontier pop, before the popped node is expanded.
    pub fn should_terminate<A>(&self, expanded_nodes: usize) -> Option<SearchResult<A>> {
        if let Some(max_expansions) = self.limits.max_expansions {
            if expanded_nodes >= max_expansions {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limits_never_terminate() {
        let condition = TerminationCondition::new(SearchLimits::default());
        assert_eq!(condition.should_terminate::<()>(usize::MAX), None);
    }

    #[test]
    fn expansion_limit() {
        let condition = TerminationCondition::new(SearchLimits {
            max_expansions: Some(3),
            ..SearchLimits::default()
        });
        assert_eq!(condition.should_terminate::<()>(2), None);
        assert_eq!(
            condition.should_terminate::<()>(3),
            Some(SearchResult::ExpansionLimitExceeded)
        );
    }

    #[test]
    fn zero_time_limit_expires() {
        let condition = TerminationCondition::new(SearchLimits {
            time_limit: Some(Duration::ZERO),
            ..SearchLimits::default()
        });
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(
            condition.should_terminate::<()>(0),
            Some(SearchResult::TimeLimitExceeded)
        );
    }
}
