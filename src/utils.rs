use anyhow::{anyhow, Result};
use std::time::Duration;

/// Parse a human duration such as `250ms`, `30s`, `2m` or a bare number of seconds.
pub fn parse_timeout(timeout_str: &str) -> Result<Duration> {
    let timeout_str = timeout_str.trim();
    if timeout_str.is_empty() {
        return Err(anyhow!("Timeout cannot be empty"));
    }

    // "ms" has to be checked before "s"
    if let Some(millis) = timeout_str.strip_suffix("ms") {
        let millis: u64 = millis.trim().parse()?;
        Ok(Duration::from_millis(millis))
    } else if let Some(seconds) = timeout_str.strip_suffix('s') {
        let seconds: u64 = seconds.trim().parse()?;
        Ok(Duration::from_secs(seconds))
    } else if let Some(minutes) = timeout_str.strip_suffix('m') {
        let minutes: u64 = minutes.trim().parse()?;
        Ok(Duration::from_secs(minutes * 60))
    } else {
        let seconds: u64 = timeout_str.parse()?;
        Ok(Duration::from_secs(seconds))
    }
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
