//! Typed CMS response documents.
//!
//! Only fields this crate reads are typed. Section content stays as raw JSON
//! because the mappers in `site-content-core` validate it field by field.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use site_content_core::media::url_from_media_object;

/// A paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub docs: Vec<T>,
    #[serde(default)]
    pub total_docs: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub has_prev_page: bool,
}

impl<T> Paged<T> {
    pub fn first(&self) -> Option<&T> {
        self.docs.first()
    }

    pub fn into_first(self) -> Option<T> {
        self.docs.into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Document IDs are numeric on SQL backends and strings on MongoDB.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    Number(u64),
    Text(String),
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocId::Number(n) => write!(f, "{n}"),
            DocId::Text(s) => f.write_str(s),
        }
    }
}

/// Decode an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A page from the `pages` collection.
///
/// Typed metadata fields are decoded leniently so one malformed field never
/// rejects the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<DocId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub page_type: Option<String>,
    /// Plain string or rich-text document.
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub sections: Option<Value>,
    /// Older documents keep their blocks under `content.sections`.
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub featured_image: Option<Value>,
    /// Tenant relation, either an ID or the populated tenant.
    #[serde(default)]
    pub tenant: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageDocument {
    /// The section blocks, wherever the document keeps them.
    pub fn sections(&self) -> Option<&Map<String, Value>> {
        self.sections
            .as_ref()
            .and_then(Value::as_object)
            .or_else(|| {
                self.content
                    .as_ref()
                    .and_then(|c| c.get("sections"))
                    .and_then(Value::as_object)
            })
    }

    /// Names of the section blocks present, sorted.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections()
            .map(|s| s.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Convert back to raw JSON for the content mappers.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// An upload from the `media` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDocument {
    #[serde(default)]
    pub id: Option<DocId>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "thumbnailURL")]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub sizes: Option<Value>,
}

impl MediaDocument {
    /// `url`, then `thumbnailURL`, then the `card` size.
    pub fn best_url(&self) -> Option<String> {
        let mut value = Map::new();
        if let Some(url) = &self.url {
            value.insert("url".into(), Value::String(url.clone()));
        }
        if let Some(thumb) = &self.thumbnail_url {
            value.insert("thumbnailURL".into(), Value::String(thumb.clone()));
        }
        if let Some(sizes) = &self.sizes {
            value.insert("sizes".into(), sizes.clone());
        }
        url_from_media_object(&Value::Object(value))
    }
}

/// A record from the `tenants` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDocument {
    #[serde(default)]
    pub id: Option<DocId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}
