use anyhow::{Context, Result};

use crate::config::StressConfig;
use crate::performance::monitor::{print_completion_banner, print_start_banner};
use crate::performance::{ConsoleReporter, LoadDriver, ScenarioResult, ScenarioRunner};
use crate::report::CsvReport;
use crate::runner::RequestExecutor;

pub async fn handle_stress() -> Result<()> {
    let config = StressConfig::from_env().context("Invalid configuration")?;
    let show_progress = atty::is(atty::Stream::Stdout);
    run_stress(&config, show_progress).await?;
    Ok(())
}

/// Run every configured scenario, reporting to the console and the results file.
pub async fn run_stress(
    config: &StressConfig,
    show_progress: bool,
) -> Result<Vec<ScenarioResult>> {
    config.validate().context("Invalid configuration")?;
    print_start_banner(config);

    let executor = RequestExecutor::new(&config.base_url, config.request_timeout)?;
    let driver = LoadDriver::new(executor).with_progress(show_progress);
    let mut runner = ScenarioRunner::new(driver)
        .with_sink(ConsoleReporter::new())
        .with_sink(CsvReport::new(&config.results_path));

    let results = runner.run(&config.scenarios()).await?;

    print_completion_banner(&config.results_path);
    Ok(results)
}
