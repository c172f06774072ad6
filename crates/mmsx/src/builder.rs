//! # Builder for SessionConfig
//!
//! # Example
//!
//! ```
//! use mmsx::SessionConfig;
//!
//! let config = SessionConfig::builder()
//!     .with_debug_trace(true)
//!     .with_prefer_legacy(false)
//!     .build();
//!
//! assert!(config.debug_trace);
//! ```

use crate::SessionConfig;

/// Builder for creating SessionConfig instances with a fluent API
#[derive(Debug, Clone)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    /// Create a new builder with both flags off
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
        }
    }

    /// Start from the flags currently set in the process environment
    pub fn from_env() -> Self {
        Self {
            config: SessionConfig::from_env(),
        }
    }

    /// Enable or disable connect tracing
    pub fn with_debug_trace(mut self, enabled: bool) -> Self {
        self.config.debug_trace = enabled;
        self
    }

    /// Try the legacy (TCP) engine first
    pub fn with_prefer_legacy(mut self, prefer: bool) -> Self {
        self.config.prefer_legacy = prefer;
        self
    }

    pub fn build(self) -> SessionConfig {
        self.config
    }
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
