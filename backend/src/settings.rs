//! Server settings loaded via OrthoConfig.
//!
//! Every value is optional; accessors apply the defaults. Environment
//! variables use the `EXAMS_` prefix (`EXAMS_PORT`, `EXAMS_DATABASE_URL`, ...).

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{GradingMode, ParseGradeError, ParsePolicyError, ResubmissionPolicy};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised when settings hold values that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid host `{value}`: expected an IP address")]
    InvalidHost { value: String },
    /// `grading` is neither `random` nor a grade letter.
    #[error("invalid grading mode: {0}")]
    Grading(#[from] ParseGradeError),
    /// `resubmission` is not a known policy.
    #[error("invalid re-submission policy: {0}")]
    Resubmission(#[from] ParsePolicyError),
}

/// Configuration values controlling the HTTP server and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMS")]
pub struct ServerSettings {
    /// Address to bind; defaults to `0.0.0.0`.
    pub host: Option<String>,
    /// Port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// PostgreSQL URL. The in-memory store is used when absent.
    pub database_url: Option<String>,
    /// `random` or a fixed grade letter.
    pub grading: Option<String>,
    /// `reject`, `overwrite`, or `allow`.
    pub resubmission: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl ServerSettings {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().map_or(DEFAULT_HOST, str::trim);
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Parsed grading mode; random when unset.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Grading`] for unknown values.
    pub fn grading_mode(&self) -> Result<GradingMode, SettingsError> {
        match self.grading.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(GradingMode::default()),
        }
    }

    /// Parsed re-submission policy; reject when unset.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Resubmission`] for unknown values.
    pub fn resubmission_policy(&self) -> Result<ResubmissionPolicy, SettingsError> {
        match self.resubmission.as_deref() {
            Some(raw) => Ok(raw.parse()?),
            None => Ok(ResubmissionPolicy::default()),
        }
    }

    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}
