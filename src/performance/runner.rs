use crate::payload;
use crate::performance::{Scenario, TaskOutcome};
use crate::runner::executor::Execute;
use crate::ui::progress::create_task_bar;
use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::Method;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outcomes of one scenario batch plus its wall-clock duration.
#[derive(Debug, Clone)]
pub struct LoadRun {
    pub outcomes: Vec<TaskOutcome>,
    pub elapsed: Duration,
}

/// Fires one scenario's worth of concurrent requests and waits for all of them.
pub struct LoadDriver<E> {
    executor: Arc<E>,
    show_progress: bool,
}

impl<E: Execute + 'static> LoadDriver<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor: Arc::new(executor),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Launch `scenario.concurrency` tasks at once and join every one of them.
    ///
    /// Each task contributes exactly one outcome, including tasks that panic.
    pub async fn run(&self, scenario: &Scenario) -> LoadRun {
        let concurrency = scenario.concurrency as usize;
        let endpoint: Arc<str> = Arc::from(scenario.endpoint.as_str());

        // Payloads are built up front so generation time stays off the clock
        let payloads: Vec<Option<String>> = (0..concurrency)
            .map(|_| payload::generate(scenario.payload_size_kb))
            .collect();

        let progress = self
            .show_progress
            .then(|| create_task_bar(concurrency as u64, &scenario.api_name));

        let mut tasks = FuturesUnordered::new();
        let batch_start = Instant::now();

        for (task_id, payload) in payloads.into_iter().enumerate() {
            let executor = Arc::clone(&self.executor);
            let endpoint = Arc::clone(&endpoint);
            let method = scenario.method.clone();

            tasks.push(tokio::spawn(async move {
                Self::task(task_id, executor, endpoint, method, payload).await
            }));
        }

        let mut outcomes = Vec::with_capacity(concurrency);
        while let Some(joined) = tasks.next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(api = %scenario.api_name, error = %e, "Task aborted before reporting");
                    TaskOutcome::failure(batch_start.elapsed())
                }
            };
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            outcomes.push(outcome);
        }

        let elapsed = batch_start.elapsed();
        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        LoadRun { outcomes, elapsed }
    }

    async fn task(
        task_id: usize,
        executor: Arc<E>,
        endpoint: Arc<str>,
        method: Method,
        payload: Option<String>,
    ) -> TaskOutcome {
        let start = Instant::now();
        let result = executor
            .execute(&endpoint, &method, payload.as_deref())
            .await;
        let latency = start.elapsed();

        match result {
            Ok(()) => TaskOutcome::success(latency),
            Err(e) => {
                debug!(task_id, error = %e, "Request failed");
                TaskOutcome::failure(latency)
            }
        }
    }
}
