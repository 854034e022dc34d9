use std::fmt;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use site_content_core::media::MediaSource;
use site_content_core::tenant::{Tenant, TenantResolver};

use crate::config::CmsConfig;
use crate::error::{CmsError, Result};
use crate::query::Where;
use crate::types::{MediaDocument, PageDocument, Paged, TenantDocument};

pub const TENANT_SLUG_HEADER: &str = "X-Tenant-Slug";
pub const TENANT_DOMAIN_HEADER: &str = "X-Tenant-Domain";

/// Extra query parameters and headers for a single request.
///
/// Setting a parameter twice keeps the last value.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key.into(), value.to_string());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Relationship population depth.
    pub fn depth(self, depth: u32) -> Self {
        self.param("depth", depth)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: String, value: String) {
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
    }

    fn set_default(&mut self, key: &str, value: impl ToString) {
        if self.get(key).is_none() {
            self.set(key.to_string(), value.to_string());
        }
    }
}

/// HTTP client for the CMS REST API.
///
/// Every request is scoped to one tenant through the `X-Tenant-Slug` and
/// `X-Tenant-Domain` headers. The CMS enforces tenant isolation; this client
/// only forwards the context. Responses are never cached.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    tenant_slug: Option<String>,
    tenant_domain: Option<String>,
    locale: Option<String>,
    debug: bool,
}

impl CmsClient {
    /// Build a client scoped to the configured default tenant.
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CmsError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tenant_slug: Some(config.tenant_slug.clone()).filter(|s| !s.is_empty()),
            tenant_domain: None,
            locale: config.locale.clone(),
            debug: config.debug,
        })
    }

    /// Build a client scoped to the tenant serving `host`.
    pub fn for_host(config: &CmsConfig, host: &str) -> Result<Self> {
        let tenant = TenantResolver::new(config.tenant_slug.as_str()).resolve(host);
        tracing::debug!(host, tenant = %tenant.slug, domain = ?tenant.domain, "resolved tenant");
        Ok(Self::new(config)?.with_tenant(tenant))
    }

    pub fn with_tenant(mut self, tenant: Tenant) -> Self {
        self.tenant_slug = Some(tenant.slug).filter(|s| !s.is_empty());
        self.tenant_domain = tenant.domain;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tenant_slug(&self) -> Option<&str> {
        self.tenant_slug.as_deref()
    }

    pub fn tenant_domain(&self) -> Option<&str> {
        self.tenant_domain.as_deref()
    }

    /// Fetch the page with this slug. At most one document is returned;
    /// `depth` defaults to 2 but the caller may override it.
    pub async fn get_page(
        &self,
        slug: &str,
        options: RequestOptions,
    ) -> Result<Paged<PageDocument>> {
        let mut options = options;
        options.set_default("depth", 2);
        options.set("where".into(), Where::equals("slug", slug).to_query());
        options.set("limit".into(), "1".into());
        tracing::debug!(slug, tenant = ?self.tenant_slug, "fetching page");
        self.get("/pages", options).await
    }

    /// Like [`get_page`](Self::get_page), unwrapped to the document itself.
    pub async fn get_page_by_slug(
        &self,
        slug: &str,
        options: RequestOptions,
    ) -> Result<Option<PageDocument>> {
        Ok(self.get_page(slug, options).await?.into_first())
    }

    /// Fetch every page visible to the tenant.
    pub async fn get_pages(&self, options: RequestOptions) -> Result<Paged<PageDocument>> {
        let mut options = options;
        options.set_default("depth", 2);
        self.get("/pages", options).await
    }

    pub async fn get_media(
        &self,
        id: impl fmt::Display,
        options: RequestOptions,
    ) -> Result<MediaDocument> {
        let options = options.depth(1);
        self.get(&format!("/media/{id}"), options).await
    }

    pub async fn get_media_files(&self, options: RequestOptions) -> Result<Paged<MediaDocument>> {
        let options = options.param("where", Where::All.to_query()).depth(1);
        self.get("/media", options).await
    }

    /// Look up the tenant record for this client: by slug when one is set,
    /// else by domain, else unfiltered.
    pub async fn get_tenant(&self, options: RequestOptions) -> Result<Paged<TenantDocument>> {
        let filter = match (&self.tenant_slug, &self.tenant_domain) {
            (Some(slug), _) => Where::equals("slug", slug.as_str()),
            (None, Some(domain)) => Where::equals("domain", domain.as_str()),
            (None, None) => Where::All,
        };
        let options = options
            .param("where", filter.to_query())
            .param("limit", 1)
            .depth(1);
        self.get("/tenants", options).await
    }

    pub async fn get<T>(&self, endpoint: &str, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, endpoint, options, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B, options: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body).map_err(CmsError::Encode)?;
        self.request(Method::POST, endpoint, options, Some(body)).await
    }

    fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> Result<Url> {
        if self.base_url.is_empty() {
            return Err(CmsError::NotConfigured);
        }

        let separator = if endpoint.starts_with('/') { "" } else { "/" };
        let raw = format!("{}/api{separator}{endpoint}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| CmsError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if self.locale.is_some() || !params.is_empty() {
            let mut query = url.query_pairs_mut();
            if let Some(locale) = &self.locale {
                query.append_pair("locale", locale);
            }
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
        body: Option<Value>,
    ) -> Result<T> {
        let url = self.build_url(endpoint, &options.params)?;

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store");
        if let Some(slug) = &self.tenant_slug {
            builder = builder.header(TENANT_SLUG_HEADER, slug.as_str());
        }
        if let Some(domain) = &self.tenant_domain {
            builder = builder.header(TENANT_DOMAIN_HEADER, domain.as_str());
        }
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        let request = builder
            .build()
            .map_err(|e| CmsError::from_reqwest(url.as_str(), e))?;

        tracing::debug!(
            %method,
            %url,
            tenant_slug = ?self.tenant_slug,
            tenant_domain = ?self.tenant_domain,
            "CMS request"
        );
        if self.debug {
            tracing::info!(%url, headers = ?request.headers(), "CMS request headers");
        }

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                let err = CmsError::from_reqwest(url.as_str(), err);
                tracing::warn!(
                    %url,
                    tenant_slug = ?self.tenant_slug,
                    tenant_domain = ?self.tenant_domain,
                    error = %err,
                    "CMS request failed"
                );
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text, reason);
            tracing::warn!(
                %url,
                status = status.as_u16(),
                tenant_slug = ?self.tenant_slug,
                tenant_domain = ?self.tenant_domain,
                error = %message,
                "CMS API error"
            );
            return Err(CmsError::Api {
                status: status.as_u16(),
                message,
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CmsError::from_reqwest(url.as_str(), e))?;
        let json: Value = serde_json::from_slice(&bytes).map_err(|source| CmsError::Decode {
            url: url.to_string(),
            source,
        })?;

        let docs = json.get("docs").and_then(Value::as_array);
        let first = docs.and_then(|docs| docs.first());
        tracing::debug!(
            %url,
            status = status.as_u16(),
            tenant_slug = ?self.tenant_slug,
            has_docs = docs.is_some(),
            doc_count = docs.map_or(0, Vec::len),
            first_doc_slug = ?first.and_then(|d| d.get("slug")),
            first_doc_tenant = ?first.and_then(|d| d.get("tenant")),
            "CMS response"
        );

        serde_json::from_value(json).map_err(|source| CmsError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl MediaSource for CmsClient {
    fn media_base_url(&self) -> &str {
        &self.base_url
    }

    async fn media_url(&self, id: u64) -> anyhow::Result<Option<String>> {
        let media = self.get_media(id, RequestOptions::new()).await?;
        Ok(media.best_url())
    }
}

/// The message to report for a failed response body.
///
/// JSON bodies yield `message` or the first entry of `errors`; other bodies
/// are reported verbatim. Anything empty falls back to the status reason.
pub(crate) fn error_message(body: &str, reason: &str) -> String {
    let fallback = || format!("API request failed: {reason}");
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| json.pointer("/errors/0/message").and_then(Value::as_str))
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(fallback),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => fallback(),
    }
}
