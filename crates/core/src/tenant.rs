/// Host-to-tenant resolution.
///
/// Several sites share one multi-tenant CMS. The inbound `Host` header picks
/// the tenant:
/// - Exact: a known host name (`www.ftiaxesite.gr`)
/// - Brand: a host containing a brand fragment, including known misspellings
/// - Default: anything else resolves to the configured default slug
use serde::{Deserialize, Serialize};

pub const DEFAULT_TENANT_SLUG: &str = "ftiaxesite";

const KNOWN_HOSTS: &[(&str, &str)] = &[
    ("ftiaxesite.gr", "ftiaxesite"),
    ("www.ftiaxesite.gr", "ftiaxesite"),
    ("ftiaxesite.vercel.app", "ftiaxesite"),
    ("ftiaxesite.sidebysites.dev", "ftiaxesite"),
    ("kallitechnia.gr", "kallitechnia"),
    ("www.kallitechnia.gr", "kallitechnia"),
    ("kallitechnia.vercel.app", "kallitechnia"),
    ("kalitechnia.gr", "kallitechnia"),
    ("www.kalitechnia.gr", "kallitechnia"),
    ("kalitechnia.vercel.app", "kallitechnia"),
    ("kaliitechnia.gr", "kallitechnia"),
    ("www.kaliitechnia.gr", "kallitechnia"),
    ("kaliitechnia.vercel.app", "kallitechnia"),
    ("kalitechnia.ftiaxesite.gr", "kallitechnia"),
    ("kallitechnia.ftiaxesite.gr", "kallitechnia"),
    ("kaliitechnia.ftiaxesite.gr", "kallitechnia"),
];

/// Checked in order; the first brand with a matching fragment wins.
const BRAND_FRAGMENTS: &[(&str, &[&str])] = &[
    ("ftiaxesite", &["ftiaxesite"]),
    ("kallitechnia", &["kallitechnia", "kalitechnia", "kaliitechnia"]),
];

/// How a host name matched the tenant tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMatch {
    Exact(&'static str),
    Brand(&'static str),
    Unknown,
}

impl HostMatch {
    /// Classify a raw host header value.
    pub fn classify(host: &str) -> Self {
        let host = normalize_host(host);
        if host.is_empty() {
            return HostMatch::Unknown;
        }

        if let Some((_, slug)) = KNOWN_HOSTS.iter().find(|(known, _)| *known == host) {
            return HostMatch::Exact(*slug);
        }

        BRAND_FRAGMENTS
            .iter()
            .find(|(_, fragments)| fragments.iter().any(|f| host.contains(f)))
            .map(|(slug, _)| HostMatch::Brand(*slug))
            .unwrap_or(HostMatch::Unknown)
    }

    pub fn slug(&self) -> Option<&'static str> {
        match self {
            HostMatch::Exact(slug) | HostMatch::Brand(slug) => Some(*slug),
            HostMatch::Unknown => None,
        }
    }
}

/// The tenant a request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub slug: String,
    /// Set when the request host was recognised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Tenant {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            domain: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Resolves host names to tenants, falling back to a default slug.
#[derive(Debug, Clone)]
pub struct TenantResolver {
    default_slug: String,
}

impl TenantResolver {
    pub fn new(default_slug: impl Into<String>) -> Self {
        let default_slug = default_slug.into();
        let default_slug = if default_slug.trim().is_empty() {
            DEFAULT_TENANT_SLUG.to_string()
        } else {
            default_slug
        };
        Self { default_slug }
    }

    pub fn default_slug(&self) -> &str {
        &self.default_slug
    }

    /// Resolve a host to a tenant slug. Always returns a slug.
    pub fn resolve_slug(&self, host: &str) -> String {
        HostMatch::classify(host)
            .slug()
            .map(str::to_string)
            .unwrap_or_else(|| self.default_slug.clone())
    }

    /// Resolve a host to a tenant, carrying the host as the tenant domain
    /// when it was recognised.
    pub fn resolve(&self, host: &str) -> Tenant {
        match HostMatch::classify(host).slug() {
            Some(slug) => Tenant::new(slug).with_domain(normalize_host(host)),
            None => Tenant::new(self.default_slug.clone()),
        }
    }
}

impl Default for TenantResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TENANT_SLUG)
    }
}

/// Lowercase, drop any `:port` suffix and a trailing root dot.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().to_ascii_lowercase();
    let host = match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name.to_string(),
        _ => host,
    };
    host.trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_hosts() {
        assert_eq!(
            HostMatch::classify("www.ftiaxesite.gr"),
            HostMatch::Exact("ftiaxesite")
        );
        assert_eq!(
            HostMatch::classify("kalitechnia.ftiaxesite.gr"),
            HostMatch::Exact("kallitechnia")
        );
    }

    #[test]
    fn brand_fragments() {
        let resolver = TenantResolver::default();
        assert_eq!(resolver.resolve_slug("preview-ftiaxesite.netlify.app"), "ftiaxesite");
        assert_eq!(resolver.resolve_slug("staging.kaliitechnia.com"), "kallitechnia");
        assert_eq!(
            HostMatch::classify("new.kallitechnia.org"),
            HostMatch::Brand("kallitechnia")
        );
    }

    #[test]
    fn unknown_host_uses_default() {
        let resolver = TenantResolver::new("acme");
        assert_eq!(resolver.resolve_slug("example.com"), "acme");
        assert_eq!(resolver.resolve_slug(""), "acme");
        assert_eq!(resolver.resolve("localhost:3000"), Tenant::new("acme"));
    }

    #[test]
    fn blank_default_falls_back_to_builtin() {
        assert_eq!(TenantResolver::new("  ").default_slug(), DEFAULT_TENANT_SLUG);
    }

    #[test]
    fn host_normalization() {
        assert_eq!(normalize_host("WWW.FtiaxeSite.GR:443"), "www.ftiaxesite.gr");
        assert_eq!(normalize_host("ftiaxesite.gr."), "ftiaxesite.gr");
        assert_eq!(normalize_host(" localhost "), "localhost");

        let tenant = TenantResolver::new("other").resolve("FTIAXESITE.GR:8080");
        assert_eq!(tenant, Tenant::new("ftiaxesite").with_domain("ftiaxesite.gr"));
    }
}
