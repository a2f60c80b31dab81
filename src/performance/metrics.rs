use crate::performance::Scenario;
use crate::utils::round2;
use serde::Serialize;
use std::time::Duration;

/// Elapsed times below this are floored to it before computing throughput.
pub const MIN_ELAPSED: Duration = Duration::from_micros(1);

/// Latency and classification of one completed task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskOutcome {
    pub latency: Duration,
    pub succeeded: bool,
}

impl TaskOutcome {
    pub fn success(latency: Duration) -> Self {
        Self {
            latency,
            succeeded: true,
        }
    }

    pub fn failure(latency: Duration) -> Self {
        Self {
            latency,
            succeeded: false,
        }
    }

    pub fn latency_millis(&self) -> f64 {
        self.latency.as_nanos() as f64 / 1_000_000.0
    }
}

/// Aggregate statistics for one scenario, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub api_name: String,
    pub concurrency: u32,
    pub payload_size_kb: f64,
    pub throughput_per_second: f64,
    pub avg_latency_millis: f64,
    pub max_latency_millis: f64,
    pub error_rate_percent: f64,
    pub successful_requests: u64,
    pub failed_requests: u64,
}

/// Reduce a finished batch into a [`ScenarioResult`].
///
/// Order independent: only sums, counts and a max are taken.
pub fn aggregate(
    scenario: &Scenario,
    outcomes: &[TaskOutcome],
    elapsed: Duration,
) -> ScenarioResult {
    let mut successful_requests = 0u64;
    let mut failed_requests = 0u64;
    let mut success_latency_total = 0.0;
    let mut max_latency = 0.0f64;

    for outcome in outcomes {
        let latency = outcome.latency_millis();
        if outcome.succeeded {
            successful_requests += 1;
            success_latency_total += latency;
        } else {
            failed_requests += 1;
        }
        max_latency = max_latency.max(latency);
    }

    let elapsed_secs = elapsed.max(MIN_ELAPSED).as_secs_f64();
    let throughput = successful_requests as f64 / elapsed_secs;
    let avg_latency = success_latency_total / successful_requests.max(1) as f64;
    let error_rate = 100.0 * failed_requests as f64 / scenario.concurrency.max(1) as f64;

    ScenarioResult {
        api_name: scenario.api_name.clone(),
        concurrency: scenario.concurrency,
        payload_size_kb: scenario.payload_size_kb,
        throughput_per_second: round2(throughput),
        avg_latency_millis: round2(avg_latency),
        max_latency_millis: round2(max_latency),
        error_rate_percent: round2(error_rate),
        successful_requests,
        failed_requests,
    }
}
