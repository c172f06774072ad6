use std::ffi::OsString;

/// Environment variable that enables connect tracing
pub const DEBUG_ENV: &str = "LIBMMS_DEBUG";

/// Environment variable that makes the TCP engine be tried before HTTP
pub const TRY_MMS_FIRST_ENV: &str = "LIBMMS_TRY_MMS_FIRST";

/// Options that control how a session is opened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Emit a trace event for every connect attempt
    pub debug_trace: bool,

    /// Try the legacy (TCP) engine before the tunneled (HTTP) one.
    ///
    /// Off by default: `mms://` is a rollover identifier and current players
    /// try HTTP first. Turning this on is mostly useful for exercising the
    /// TCP engine against servers that speak both.
    pub prefer_legacy: bool,
}

impl SessionConfig {
    pub fn builder() -> crate::builder::SessionConfigBuilder {
        crate::builder::SessionConfigBuilder::new()
    }

    /// Resolve the configuration from the process environment.
    ///
    /// A flag is on when its variable is present, whatever its value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Resolve the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self {
            debug_trace: lookup(DEBUG_ENV).is_some(),
            prefer_legacy: lookup(TRY_MMS_FIRST_ENV).is_some(),
        }
    }
}
