//! Lifecycle configuration
//!
//! Decides what a failed engine load leaves behind. The lifecycle never
//! retries on its own; the policy only controls whether a *later*
//! `initialize` call may try again.
//!
//! # Example
//!
//! ```
//! use styled_qr_core::config::{FailurePolicy, LifecycleConfig};
//!
//! let config = LifecycleConfig::default().with_failure_policy(FailurePolicy::Sticky);
//! assert_eq!(config.failure_policy, FailurePolicy::Sticky);
//! ```
//!
//! # Environment Variable
//!
//! `LifecycleConfig::from_env()` reads `STYLED_QR_FAILURE_POLICY`:
//!
//! ```bash
//! STYLED_QR_FAILURE_POLICY=sticky ./my_app
//! ```

use crate::error::VariantError;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`LifecycleConfig::from_env`]
pub const FAILURE_POLICY_ENV: &str = "STYLED_QR_FAILURE_POLICY";

/// What a failed load attempt leaves behind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Back to uninitialized: the next `initialize` call starts a fresh attempt
    #[default]
    Retry,
    /// Failed for good: later calls get the original error, the loader is not invoked again
    Sticky,
}

impl FromStr for FailurePolicy {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retry" => Ok(Self::Retry),
            "sticky" => Ok(Self::Sticky),
            _ => Err(VariantError::UnknownName {
                axis: "failure policy",
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Retry => "retry",
            Self::Sticky => "sticky",
        })
    }
}

/// Settings for an [`EngineLifecycle`](crate::lifecycle::EngineLifecycle)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleConfig {
    pub failure_policy: FailurePolicy,
}

impl LifecycleConfig {
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Defaults, overridden by `STYLED_QR_FAILURE_POLICY` when set
    ///
    /// An unparseable value is logged and ignored.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(FAILURE_POLICY_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = value {
            match raw.parse() {
                Ok(policy) => {
                    log::info!("styled-qr failure policy '{}' via {}", policy, FAILURE_POLICY_ENV);
                    config.failure_policy = policy;
                }
                Err(e) => log::warn!(
                    "Ignoring {}: {} (keeping '{}')",
                    FAILURE_POLICY_ENV,
                    e,
                    config.failure_policy
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_retry() {
        assert_eq!(LifecycleConfig::default().failure_policy, FailurePolicy::Retry);
        assert_eq!(LifecycleConfig::from_env_value(None), LifecycleConfig::default());
    }

    #[test]
    fn test_env_value_selects_policy() {
        assert_eq!(
            LifecycleConfig::from_env_value(Some("Sticky")).failure_policy,
            FailurePolicy::Sticky
        );
        assert_eq!(
            LifecycleConfig::from_env_value(Some(" retry ")).failure_policy,
            FailurePolicy::Retry
        );
    }

    #[test]
    fn test_bad_env_value_keeps_default() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(
            LifecycleConfig::from_env_value(Some("sometimes")).failure_policy,
            FailurePolicy::Retry
        );
    }

    #[test]
    fn test_policy_parse_and_display() {
        for policy in [FailurePolicy::Retry, FailurePolicy::Sticky] {
            assert_eq!(policy.to_string().parse::<FailurePolicy>().unwrap(), policy);
        }
        assert_eq!(
            "sometimes".parse::<FailurePolicy>().unwrap_err(),
            VariantError::UnknownName {
                axis: "failure policy",
                name: "sometimes".into(),
            }
        );
    }
}
