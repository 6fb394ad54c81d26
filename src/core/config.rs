use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Number of hits returned by a top-documents query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance values closer than this are ranked as equal.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Trailing window of the request history, one entry per minute of a day.
pub const HISTORY_WINDOW: usize = 1440;

pub const DEFAULT_ACCUMULATOR_BUCKETS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_result_document_count: usize,
    pub relevance_epsilon: f64,

    // parallel scoring
    pub accumulator_buckets: usize,
    /// `None` runs on the global rayon pool, `Some(0)` sizes a dedicated
    /// pool to the number of logical CPUs.
    pub worker_threads: Option<usize>,

    pub history_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_result_document_count: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
            accumulator_buckets: DEFAULT_ACCUMULATOR_BUCKETS,
            worker_threads: None,
            history_window: HISTORY_WINDOW,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_result_document_count == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument,
                                  "max_result_document_count must be positive".to_string()));
        }
        if self.accumulator_buckets == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument,
                                  "accumulator_buckets must be positive".to_string()));
        }
        if self.history_window == 0 {
            return Err(Error::new(ErrorKind::InvalidArgument,
                                  "history_window must be positive".to_string()));
        }
        if !self.relevance_epsilon.is_finite() || self.relevance_epsilon < 0.0 {
            return Err(Error::new(ErrorKind::InvalidArgument,
                                  format!("relevance_epsilon {} is not a finite non-negative number",
                                          self.relevance_epsilon)));
        }
        Ok(())
    }

    pub fn resolved_worker_threads(&self) -> Option<usize> {
        match self.worker_threads {
            Some(0) => Some(num_cpus::get()),
            other => other,
        }
    }
}
