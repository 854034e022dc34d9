//! Media references and URL resolution.

use async_trait::async_trait;
use serde_json::Value;

/// An image field as the CMS delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    /// A URL, either absolute or relative to the CMS.
    Url(String),
    /// An unpopulated upload relation, resolved with a secondary fetch.
    Id(u64),
}

impl MediaRef {
    /// Classify a raw image field. Returns `None` for anything unusable.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(MediaRef::Url(s.trim().to_string())),
            Value::Number(n) => n.as_u64().map(MediaRef::Id),
            Value::Object(_) => url_from_media_object(value)
                .map(MediaRef::Url)
                .or_else(|| value.get("id").and_then(Value::as_u64).map(MediaRef::Id)),
            _ => None,
        }
    }
}

/// Pick the best URL from a populated media document: `url`, then
/// `thumbnailURL`, then the `card` size.
pub fn url_from_media_object(value: &Value) -> Option<String> {
    let candidates = [
        value.get("url"),
        value.get("thumbnailURL"),
        value.pointer("/sizes/card/url"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

/// Make a CMS media URL absolute.
///
/// Absolute URLs pass through, `/`-rooted paths are prefixed with the CMS
/// base URL, and anything else is left relative to the consuming site.
pub fn absolute_media_url(url: &str, base_url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if url.starts_with('/') {
        let base = base_url.trim_end_matches('/');
        if base.is_empty() {
            tracing::warn!(url, "CMS base URL not set, cannot absolutize media URL");
            return url.to_string();
        }
        return format!("{base}{url}");
    }
    url.to_string()
}

/// Where numeric media references are looked up.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Base URL used to absolutize `/`-rooted media paths.
    fn media_base_url(&self) -> &str;

    /// Fetch the media document with this ID and return its best URL.
    async fn media_url(&self, id: u64) -> anyhow::Result<Option<String>>;
}

/// A media source with no CMS behind it: URLs are absolutized against a
/// fixed base and numeric references never resolve.
#[derive(Debug, Clone, Default)]
pub struct StaticMedia {
    base_url: String,
}

impl StaticMedia {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MediaSource for StaticMedia {
    fn media_base_url(&self) -> &str {
        &self.base_url
    }

    async fn media_url(&self, id: u64) -> anyhow::Result<Option<String>> {
        anyhow::bail!("media {id} cannot be resolved without a CMS")
    }
}

/// Resolve an image field to an absolute URL.
///
/// Numeric IDs trigger a best-effort fetch; a failed or empty lookup is
/// logged and yields `None` so the caller can substitute its default.
pub async fn resolve_media_url<M>(value: Option<&Value>, source: &M) -> Option<String>
where
    M: MediaSource + ?Sized,
{
    let url = match MediaRef::from_value(value?)? {
        MediaRef::Url(url) => url,
        MediaRef::Id(id) => match source.media_url(id).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                tracing::warn!(media_id = id, "media document has no usable URL");
                return None;
            }
            Err(err) => {
                tracing::warn!(media_id = id, error = %err, "failed to resolve media by ID");
                return None;
            }
        },
    };
    Some(absolute_media_url(&url, source.media_base_url()))
}
