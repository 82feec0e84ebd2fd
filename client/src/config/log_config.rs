use common::config::Validate;
use common::logger::LogTarget;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    /// Log file path; logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<String>,
}

impl LogConfig {
    pub fn target(&self) -> LogTarget {
        match &self.file {
            Some(file) => LogTarget::File(PathBuf::from(file)),
            None => LogTarget::Stderr,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err("log file must not be empty if provided".to_string());
        }
        Ok(())
    }
}
