//! Configuration module
//!
//! Env-driven settings for the ingestion pipeline: the intake file-size
//! ceiling, accepted link content types, and the remote probe timeout.

use std::env;

use crate::constants::{DEFAULT_PROBE_TIMEOUT_SECS, INTAKE_MAX_FILE_SIZE_BYTES, PDF_CONTENT_TYPE};

/// Ingestion pipeline configuration.
#[derive(Clone, Debug)]
pub struct IngestConfig {
    /// Timeout for the outbound content probe, in seconds.
    pub probe_timeout_secs: u64,
    /// Fixed ceiling for a single intake file, regardless of plan.
    pub intake_max_file_size_bytes: u64,
    /// Content types accepted for link ingestion.
    pub link_content_types: Vec<String>,
}

impl IngestConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let probe_timeout_secs = env::var("PROBE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_PROBE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS);

        let intake_max_file_size_bytes = env::var("INTAKE_MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(|mb| mb * 1024 * 1024)
            .unwrap_or(INTAKE_MAX_FILE_SIZE_BYTES);

        let link_content_types = env::var("LINK_CONTENT_TYPES")
            .unwrap_or_else(|_| PDF_CONTENT_TYPE.to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let config = IngestConfig {
            probe_timeout_secs,
            intake_max_file_size_bytes,
            link_content_types,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.intake_max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!(
                "INTAKE_MAX_FILE_SIZE_MB must be greater than zero"
            ));
        }
        if self.link_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "LINK_CONTENT_TYPES must list at least one content type"
            ));
        }
        Ok(())
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            intake_max_file_size_bytes: INTAKE_MAX_FILE_SIZE_BYTES,
            link_content_types: vec![PDF_CONTENT_TYPE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IngestConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.intake_max_file_size_bytes, 8 * 1024 * 1024);
        assert_eq!(config.link_content_types, vec!["application/pdf"]);
    }

    #[test]
    fn test_validate_rejects_zero_ceiling() {
        let config = IngestConfig {
            intake_max_file_size_bytes: 0,
            ..IngestConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_content_types() {
        let config = IngestConfig {
            link_content_types: vec![],
            ..IngestConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
