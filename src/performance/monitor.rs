use crate::config::StressConfig;
use crate::performance::{ResultSink, ScenarioResult};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

/// Prints one line per completed scenario.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_line(result: &ScenarioResult) -> String {
        format!(
            "{} | users {} | payload {}KB | {:.2} req/s | avg {:.2}ms | max {:.2}ms | errors {:.2}%",
            result.api_name,
            result.concurrency,
            result.payload_size_kb,
            result.throughput_per_second,
            result.avg_latency_millis,
            result.max_latency_millis,
            result.error_rate_percent,
        )
    }
}

impl ResultSink for ConsoleReporter {
    fn record(&mut self, result: &ScenarioResult) -> Result<()> {
        let line = Self::format_line(result);
        match ErrorBand::of(result.error_rate_percent) {
            ErrorBand::Good => println!("{} {}", "✔".green(), line),
            ErrorBand::Fair => println!("{} {}", "⚠".yellow(), line.yellow()),
            ErrorBand::Poor => println!("{} {}", "✘".red(), line.red()),
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ErrorBand {
    Good,
    Fair,
    Poor,
}

impl ErrorBand {
    fn of(error_rate_percent: f64) -> Self {
        if error_rate_percent <= 1.0 {
            ErrorBand::Good
        } else if error_rate_percent <= 10.0 {
            ErrorBand::Fair
        } else {
            ErrorBand::Poor
        }
    }
}

pub fn print_start_banner(config: &StressConfig) {
    println!("{} Starting API stress tests...", "🚀".bright_white());
    println!("   Base URL: {}", config.base_url.bright_white());
    println!("   Method: {}", config.method.as_str().bright_white());
    for endpoint in &config.endpoints {
        println!(
            "   {}: {}",
            endpoint.name,
            endpoint.path.bright_white()
        );
    }
    let levels: Vec<String> = config
        .load_levels
        .iter()
        .map(|level| format!("{} users @ {}KB", level.concurrency, level.payload_size_kb))
        .collect();
    println!("   Load levels: {}", levels.join(", ").bright_white());
    println!("{}", "=".repeat(60).dimmed());
}

pub fn print_completion_banner(results_path: &Path) {
    println!("{}", "=".repeat(60).dimmed());
    println!(
        "{} Done. Results saved to {}",
        "✔".green().bold(),
        results_path.display().to_string().bright_white()
    );
}
