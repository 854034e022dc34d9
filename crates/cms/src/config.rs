use std::env;
use std::time::Duration;

use site_content_core::tenant::DEFAULT_TENANT_SLUG;

use crate::error::ConfigError;

pub const DEFAULT_SITE_URL: &str = "https://ftiaxesite.gr";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// CMS connection settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    /// CMS origin without a trailing slash. Empty when unconfigured.
    pub base_url: String,
    /// Tenant used when a host name is not recognized.
    pub tenant_slug: String,
    /// Canonical origin of the consuming site.
    pub site_url: String,
    /// Sent as the `locale` query parameter when set.
    pub locale: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Dump request headers on every call.
    pub debug: bool,
}

impl CmsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let base_url = var("CMS_BASE_URL")
            .or_else(|| var("PAYLOAD_URL"))
            .map(|url| trim_base_url(&url))
            .unwrap_or_default();
        if base_url.is_empty() {
            tracing::warn!("CMS_BASE_URL is not set, every CMS request will fail");
        }

        let tenant_slug = var("TENANT_SLUG").unwrap_or_else(|| {
            tracing::warn!(default = DEFAULT_TENANT_SLUG, "TENANT_SLUG is not set");
            DEFAULT_TENANT_SLUG.to_string()
        });

        let timeout = match var("CMS_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "CMS_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let debug = match var("CMS_DEBUG") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: "CMS_DEBUG",
                expected: "true or false",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            base_url,
            tenant_slug,
            site_url: var("SITE_URL")
                .map(|url| trim_base_url(&url))
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            locale: var("CMS_LOCALE"),
            timeout,
            debug,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_base_url(&url.into());
        self
    }

    pub fn with_tenant_slug(mut self, slug: impl Into<String>) -> Self {
        self.tenant_slug = slug.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Whether a CMS base URL is present.
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            tenant_slug: DEFAULT_TENANT_SLUG.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            locale: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug: false,
        }
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = CmsConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CmsConfig::default());
        assert!(!config.is_configured());
        assert_eq!(config.tenant_slug, "ftiaxesite");
        assert_eq!(config.site_url, "https://ftiaxesite.gr");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_every_variable() {
        let config = CmsConfig::from_lookup(lookup(&[
            ("CMS_BASE_URL", "https://cms.example.com/"),
            ("TENANT_SLUG", "kallitechnia"),
            ("SITE_URL", "https://kallitechnia.gr/"),
            ("CMS_LOCALE", "el"),
            ("CMS_TIMEOUT_SECS", "3"),
            ("CMS_DEBUG", "true"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://cms.example.com");
        assert_eq!(config.tenant_slug, "kallitechnia");
        assert_eq!(config.site_url, "https://kallitechnia.gr");
        assert_eq!(config.locale.as_deref(), Some("el"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.debug);
        assert!(config.is_configured());
    }

    #[test]
    fn payload_url_is_a_fallback() {
        let config =
            CmsConfig::from_lookup(lookup(&[("PAYLOAD_URL", "https://payload.example.com")]))
                .unwrap();
        assert_eq!(config.base_url, "https://payload.example.com");

        let config = CmsConfig::from_lookup(lookup(&[
            ("CMS_BASE_URL", "https://cms.example.com"),
            ("PAYLOAD_URL", "https://payload.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://cms.example.com");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            CmsConfig::from_lookup(lookup(&[("TENANT_SLUG", "  "), ("CMS_LOCALE", "")])).unwrap();
        assert_eq!(config.tenant_slug, "ftiaxesite");
        assert_eq!(config.locale, None);
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = CmsConfig::from_lookup(lookup(&[("CMS_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("CMS_TIMEOUT_SECS"));

        assert!(CmsConfig::from_lookup(lookup(&[("CMS_TIMEOUT_SECS", "0")])).is_err());
        assert!(CmsConfig::from_lookup(lookup(&[("CMS_DEBUG", "maybe")])).is_err());
    }

    #[test]
    fn builder_methods() {
        let config = CmsConfig::new("https://cms.example.com///")
            .with_tenant_slug("other")
            .with_locale("en")
            .with_timeout(Duration::from_millis(250))
            .with_debug(true);
        assert_eq!(config.base_url, "https://cms.example.com");
        assert_eq!(config.tenant_slug, "other");
        assert_eq!(config.locale.as_deref(), Some("en"));
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert!(config.debug);
    }
}
