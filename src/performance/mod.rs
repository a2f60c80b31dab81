pub mod metrics;
pub mod monitor;
pub mod runner;
pub mod scenario;

pub use metrics::{aggregate, ScenarioResult, TaskOutcome};
pub use monitor::ConsoleReporter;
pub use runner::{LoadDriver, LoadRun};
pub use scenario::{ResultSink, Scenario, ScenarioRunner};
