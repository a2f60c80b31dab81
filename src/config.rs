use crate::performance::Scenario;
use crate::utils::parse_timeout;
use reqwest::Method;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_RESULTS_FILE: &str = "results.csv";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Number of `ENDPOINT_<n>` variables that must be present.
pub const MIN_ENDPOINTS: usize = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(String),
    #[error("BASE_URL '{value}' is not a valid URL: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("HTTP_METHOD '{0}' is not a valid HTTP method")]
    InvalidMethod(String),
    #[error("REQUEST_TIMEOUT '{value}' is invalid: {reason}")]
    InvalidTimeout { value: String, reason: String },
    #[error("at least two endpoints are required, found {0}")]
    NotEnoughEndpoints(usize),
}

/// One load-test target: the path appended to the base URL and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub path: String,
}

/// Concurrency and payload size applied to every endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadLevel {
    pub concurrency: u32,
    pub payload_size_kb: f64,
}

impl LoadLevel {
    pub const fn new(concurrency: u32, payload_size_kb: f64) -> Self {
        Self {
            concurrency,
            payload_size_kb,
        }
    }
}

pub const DEFAULT_LOAD_LEVELS: [LoadLevel; 3] = [
    LoadLevel::new(10, 0.1),
    LoadLevel::new(100, 0.1),
    LoadLevel::new(500, 0.1),
];

#[derive(Debug, Clone)]
pub struct StressConfig {
    pub base_url: String,
    pub endpoints: Vec<Endpoint>,
    pub method: Method,
    pub load_levels: Vec<LoadLevel>,
    pub results_path: PathBuf,
    pub request_timeout: Duration,
}

impl StressConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = get("BASE_URL").ok_or_else(|| ConfigError::MissingVar("BASE_URL".into()))?;
        Url::parse(&base_url).map_err(|source| ConfigError::InvalidUrl {
            value: base_url.clone(),
            source,
        })?;

        let mut endpoints = Vec::new();
        for index in 1.. {
            let key = format!("ENDPOINT_{}", index);
            match get(&key) {
                Some(path) => endpoints.push(Endpoint {
                    name: format!("API_Endpoint{}", index),
                    path,
                }),
                None if index <= MIN_ENDPOINTS => return Err(ConfigError::MissingVar(key)),
                None => break,
            }
        }

        let method = match get("HTTP_METHOD") {
            Some(raw) => raw
                .trim()
                .to_uppercase()
                .parse::<Method>()
                .map_err(|_| ConfigError::InvalidMethod(raw.clone()))?,
            None => Method::POST,
        };

        let request_timeout = match get("REQUEST_TIMEOUT") {
            Some(raw) => parse_timeout(&raw).map_err(|e| ConfigError::InvalidTimeout {
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let results_path = get("RESULTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_FILE));

        let config = Self {
            base_url,
            endpoints,
            method,
            load_levels: DEFAULT_LOAD_LEVELS.to_vec(),
            results_path,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.len() < MIN_ENDPOINTS {
            return Err(ConfigError::NotEnoughEndpoints(self.endpoints.len()));
        }
        Ok(())
    }

    /// Expand load levels over endpoints, load level first, both in declaration order.
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.load_levels
            .iter()
            .flat_map(|level| {
                self.endpoints.iter().map(move |endpoint| Scenario {
                    api_name: endpoint.name.clone(),
                    endpoint: endpoint.path.clone(),
                    method: self.method.clone(),
                    concurrency: level.concurrency,
                    payload_size_kb: level.payload_size_kb,
                })
            })
            .collect()
    }
}
