//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use exam_backend::domain::{GradingMode, ResubmissionPolicy};
use exam_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) grading: GradingMode,
    pub(crate) policy: ResubmissionPolicy,
}

impl ServerConfig {
    /// Construct a configuration using in-memory storage, random grading,
    /// and the reject policy.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            grading: GradingMode::default(),
            policy: ResubmissionPolicy::default(),
        }
    }

    /// Attach a database connection pool for the Diesel repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_grading(mut self, grading: GradingMode) -> Self {
        self.grading = grading;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ResubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }
}
