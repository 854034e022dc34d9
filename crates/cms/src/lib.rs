//! Client for the multi-tenant CMS that serves the site's page content.

pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod query;
pub mod types;

pub use client::{CmsClient, RequestOptions};
pub use config::CmsConfig;
pub use error::{CmsError, ConfigError, Result};
pub use loader::{load_page, load_page_with_shared, HOME_SLUG};
pub use query::Where;
pub use types::{DocId, MediaDocument, PageDocument, Paged, TenantDocument};
