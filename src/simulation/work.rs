//! The simulated unit of work every endpoint performs.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::{DelayRange, SimulationConfig};
use crate::simulation::random::RandomSource;

/// Outcome label for a simulated unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Low,
    High,
}

impl Category {
    /// Classify a unit draw against the boundary. A draw exactly on the
    /// boundary is `High`.
    pub fn classify(value: f64, threshold: f64) -> Self {
        if value < threshold {
            Category::Low
        } else {
            Category::High
        }
    }

    /// Label value used on the outcome counter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::High => "high",
        }
    }
}

/// Result of one simulated unit of work. Owned by the request that
/// produced it and discarded with the response.
#[derive(Debug, Clone, Copy)]
pub struct WorkOutcome {
    /// The unit draw the category was derived from.
    pub random_value: f64,

    pub category: Category,

    /// How long the simulated upstream call slept.
    pub sleep_duration: Duration,

    /// Wall time for the whole unit of work; at least `sleep_duration`.
    pub elapsed: Duration,
}

/// Executes simulated units of work: an outcome draw, a randomized
/// cooperative delay, and a classification.
#[derive(Clone)]
pub struct WorkSimulator {
    random: Arc<dyn RandomSource>,
    low_threshold: f64,
    error_probability: f64,
}

impl WorkSimulator {
    pub fn new(random: Arc<dyn RandomSource>, tuning: &SimulationConfig) -> Self {
        Self {
            random,
            low_threshold: tuning.low_threshold,
            error_probability: tuning.error_probability,
        }
    }

    /// Run one simulated unit of work.
    ///
    /// Consumes exactly two draws from the random source, in order: the
    /// outcome value, then the sleep duration. The sleep suspends the
    /// calling task; other requests keep running.
    pub async fn simulate(&self, range: DelayRange) -> WorkOutcome {
        let start = Instant::now();

        let random_value = self.random.unit();
        let sleep_ms = self.random.range(range.min_ms as f64, range.max_ms as f64);
        let sleep_duration = Duration::from_secs_f64(sleep_ms / 1000.0);

        tokio::time::sleep(sleep_duration).await;

        let category = Category::classify(random_value, self.low_threshold);

        WorkOutcome {
            random_value,
            category,
            sleep_duration,
            elapsed: start.elapsed(),
        }
    }

    /// Independent failure draw for the error-demo route. One draw.
    pub fn draw_failure(&self) -> bool {
        self.random.unit() < self.error_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::random::ScriptedSource;

    fn simulator(draws: Vec<f64>) -> WorkSimulator {
        WorkSimulator::new(
            Arc::new(ScriptedSource::new(draws)),
            &SimulationConfig::default(),
        )
    }

    #[test]
    fn classification_boundary_is_strict() {
        assert_eq!(Category::classify(0.0999, 0.1), Category::Low);
        assert_eq!(Category::classify(0.1, 0.1), Category::High);
        assert_eq!(Category::classify(0.0, 0.1), Category::Low);
        assert_eq!(Category::classify(0.9999, 0.1), Category::High);
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Low).unwrap(),
            "\"low\""
        );
        assert_eq!(
            serde_json::to_string(&Category::High).unwrap(),
            "\"high\""
        );
    }

    #[tokio::test]
    async fn simulate_reports_scripted_outcome() {
        // First draw is the outcome value, second picks the sleep duration.
        let sim = simulator(vec![0.05, 0.0]);
        let outcome = sim.simulate(DelayRange::new(1, 2)).await;

        assert_eq!(outcome.random_value, 0.05);
        assert_eq!(outcome.category, Category::Low);
        assert_eq!(outcome.sleep_duration, Duration::from_millis(1));
        assert!(outcome.elapsed >= outcome.sleep_duration);
    }

    #[tokio::test]
    async fn sleep_stays_within_range() {
        let sim = WorkSimulator::new(
            Arc::new(crate::simulation::random::ThreadRngSource),
            &SimulationConfig::default(),
        );

        for _ in 0..10 {
            let outcome = sim.simulate(DelayRange::new(1, 5)).await;
            let ms = outcome.sleep_duration.as_secs_f64() * 1000.0;
            assert!((1.0..5.0).contains(&ms), "sleep {ms}ms outside [1, 5)");
        }
    }

    #[test]
    fn failure_draw_uses_error_probability() {
        let sim = simulator(vec![0.29, 0.3, 0.31]);
        assert!(sim.draw_failure(), "0.29 < 0.3 should fail");
        assert!(!sim.draw_failure(), "0.3 is not below 0.3");
        assert!(!sim.draw_failure());
    }
}
