//! Page loading with fallback to the default content.

use serde_json::Value;

use site_content_core::page::compose_page;
use site_content_core::sections::PageData;

use crate::client::{CmsClient, RequestOptions};

pub const HOME_SLUG: &str = "home";

/// Fetch and compose a page. Never fails: an unreachable CMS, an error
/// response or a missing page all produce the default content.
pub async fn load_page(client: &CmsClient, slug: &str) -> PageData {
    load_page_with_shared(client, slug, None).await
}

/// Like [`load_page`], also fetching a shared document whose `header` and
/// `footer` stand in for missing page sections. Both fetches run concurrently.
pub async fn load_page_with_shared(
    client: &CmsClient,
    slug: &str,
    shared_slug: Option<&str>,
) -> PageData {
    let shared = async {
        match shared_slug {
            Some(shared_slug) => fetch_page(client, shared_slug).await,
            None => None,
        }
    };
    let (page, shared) = tokio::join!(fetch_page(client, slug), shared);

    if page.is_none() {
        tracing::warn!(slug, tenant = ?client.tenant_slug(), "rendering default page content");
    }
    compose_page(page.as_ref(), shared.as_ref(), client).await
}

async fn fetch_page(client: &CmsClient, slug: &str) -> Option<Value> {
    let doc = match client.get_page_by_slug(slug, RequestOptions::new()).await {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            tracing::warn!(slug, tenant = ?client.tenant_slug(), "page not found");
            return None;
        }
        Err(err) => {
            tracing::warn!(
                slug,
                tenant = ?client.tenant_slug(),
                error = %err,
                "failed to load page"
            );
            return None;
        }
    };

    match doc.to_value() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(slug, error = %err, "failed to re-encode page document");
            None
        }
    }
}
