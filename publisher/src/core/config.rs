//! Publish configuration values and their validation.

use std::time::Duration;

use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Publish configuration (TOML).
///
/// Every field is optional; the defaults publish the English site to the
/// `gh-pages` branch of the original remote.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Git remote cloned into the web directory when it is missing.
    pub remote: String,

    /// Branch checked out in a fresh web checkout.
    pub branch: String,

    /// Locale generated and redirected to (`/<locale>`).
    pub locale: String,

    /// Build profile passed to the generator as `--env`.
    pub env: String,

    /// Static-site generator executable.
    pub generator: String,

    /// Continue past failing commands instead of halting the queue.
    pub keep_going: bool,

    /// Per-command wall-clock limit in seconds; 0 waits forever.
    pub command_timeout_secs: u64,

    /// Keep at most this many bytes of each command's stdout/stderr.
    pub output_limit_bytes: usize,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            remote: "git@github.com:fudriot/fabarea.tk.git".to_string(),
            branch: "gh-pages".to_string(),
            locale: "en".to_string(),
            env: "prod".to_string(),
            generator: "sculpin".to_string(),
            keep_going: false,
            command_timeout_secs: 0,
            output_limit_bytes: 1_000_000,
        }
    }
}

impl PublishConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("remote", &self.remote),
            ("branch", &self.branch),
            ("locale", &self.locale),
            ("env", &self.env),
            ("generator", &self.generator),
        ] {
            if value.is_empty() {
                return Err(anyhow!("{name} must not be empty"));
            }
            if value.trim() != value.as_str() {
                return Err(anyhow!("{name} must not have surrounding whitespace"));
            }
        }
        if self.locale.contains('/') || self.locale == "." || self.locale == ".." {
            return Err(anyhow!(
                "locale must be a single path segment, got '{}'",
                self.locale
            ));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        Ok(())
    }

    /// URL path the redirect page points at.
    pub fn redirect_target(&self) -> String {
        format!("/{}", self.locale)
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        match self.command_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_values() {
        let cfg = PublishConfig {
            locale: "en/us".to_string(),
            ..PublishConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = PublishConfig {
            generator: String::new(),
            ..PublishConfig::default()
        };
        let err = cfg.validate().expect_err("empty generator");
        assert!(err.to_string().contains("generator"));

        let cfg = PublishConfig {
            output_limit_bytes: 0,
            ..PublishConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_timeout_means_wait_forever() {
        let mut cfg = PublishConfig::default();
        assert_eq!(cfg.command_timeout(), None);
        cfg.command_timeout_secs = 5;
        assert_eq!(cfg.command_timeout(), Some(Duration::from_secs(5)));
    }
}
