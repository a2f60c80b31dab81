use crate::performance::metrics::{aggregate, ScenarioResult};
use crate::performance::runner::LoadDriver;
use crate::runner::executor::Execute;
use anyhow::Result;
use reqwest::Method;
use tracing::info;

/// One endpoint at one concurrency level and payload size.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub api_name: String,
    pub endpoint: String,
    pub method: Method,
    pub concurrency: u32,
    pub payload_size_kb: f64,
}

/// Receives each completed scenario result, in completion order.
pub trait ResultSink {
    fn record(&mut self, result: &ScenarioResult) -> Result<()>;
}

/// Runs scenarios strictly one after another.
pub struct ScenarioRunner<E> {
    driver: LoadDriver<E>,
    sinks: Vec<Box<dyn ResultSink + Send>>,
}

impl<E: Execute + 'static> ScenarioRunner<E> {
    pub fn new(driver: LoadDriver<E>) -> Self {
        Self {
            driver,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: impl ResultSink + Send + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub async fn run(&mut self, scenarios: &[Scenario]) -> Result<Vec<ScenarioResult>> {
        let mut results = Vec::with_capacity(scenarios.len());

        for scenario in scenarios {
            info!(
                api = %scenario.api_name,
                concurrency = scenario.concurrency,
                payload_kb = scenario.payload_size_kb,
                "Starting scenario"
            );

            // The next scenario starts only once every task of this one has finished
            let run = self.driver.run(scenario).await;
            let result = aggregate(scenario, &run.outcomes, run.elapsed);

            for sink in &mut self.sinks {
                sink.record(&result)?;
            }
            results.push(result);
        }

        Ok(results)
    }
}
