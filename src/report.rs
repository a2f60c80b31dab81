use crate::performance::{ResultSink, ScenarioResult};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 7] = [
    "API",
    "Users",
    "PayloadKB",
    "Throughput",
    "AvgLatency",
    "MaxLatency",
    "ErrorRate",
];

/// Append-only CSV file with one row per scenario.
#[derive(Debug, Clone)]
pub struct CsvReport {
    path: PathBuf,
}

impl CsvReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, result: &ScenarioResult) -> Result<()> {
        // Header only goes into a fresh (absent or empty) file
        let needs_header = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open results file: {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer
                .write_record(CSV_HEADER)
                .context("Failed to write CSV header")?;
        }
        writer
            .write_record(to_record(result))
            .context("Failed to write CSV record")?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush results file: {}", self.path.display()))?;

        Ok(())
    }
}

impl ResultSink for CsvReport {
    fn record(&mut self, result: &ScenarioResult) -> Result<()> {
        self.append(result)
    }
}

fn to_record(result: &ScenarioResult) -> [String; 7] {
    [
        result.api_name.clone(),
        result.concurrency.to_string(),
        result.payload_size_kb.to_string(),
        format!("{:.2}", result.throughput_per_second),
        format!("{:.2}", result.avg_latency_millis),
        format!("{:.2}", result.max_latency_millis),
        format!("{:.2}", result.error_rate_percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn result(api_name: &str, concurrency: u32) -> ScenarioResult {
        ScenarioResult {
            api_name: api_name.to_string(),
            concurrency,
            payload_size_kb: 0.1,
            throughput_per_second: 500.0,
            avg_latency_millis: 11.1,
            max_latency_millis: 14.0,
            error_rate_percent: 0.0,
            successful_requests: concurrency as u64,
            failed_requests: 0,
        }
    }

    #[test]
    fn test_header_written_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.csv");
        let report = CsvReport::new(&path);

        report.append(&result("API_Endpoint1", 10)).unwrap();
        report.append(&result("API_Endpoint2", 10)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "API,Users,PayloadKB,Throughput,AvgLatency,MaxLatency,ErrorRate",
                "API_Endpoint1,10,0.1,500.00,11.10,14.00,0.00",
                "API_Endpoint2,10,0.1,500.00,11.10,14.00,0.00",
            ]
        );
    }

    #[test]
    fn test_existing_file_is_appended_without_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.csv");
        fs::write(
            &path,
            "API,Users,PayloadKB,Throughput,AvgLatency,MaxLatency,ErrorRate\nold,1,0,1.00,1.00,1.00,0.00\n",
        )
        .unwrap();

        let mut report = CsvReport::new(&path);
        report.record(&result("API_Endpoint1", 100)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert_eq!(content.matches("API,Users").count(), 1);
        assert!(content.ends_with("API_Endpoint1,100,0.1,500.00,11.10,14.00,0.00\n"));
    }

    #[test]
    fn test_empty_file_gets_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.csv");
        fs::write(&path, "").unwrap();

        CsvReport::new(&path).append(&result("API_Endpoint1", 10)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("API,Users,PayloadKB"));
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_dir").join("results.csv");
        assert!(CsvReport::new(path).append(&result("API_Endpoint1", 10)).is_err());
    }
}
