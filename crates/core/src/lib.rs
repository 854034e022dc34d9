//! Content resolution for the ftiaxesite.gr landing pages.
//!
//! Everything here is I/O-free apart from the [`media::MediaSource`] seam:
//! rich-text normalization, host to tenant inference, the default content
//! table and the mappers that merge CMS documents into complete sections.

pub mod defaults;
pub mod mapper;
pub mod media;
pub mod page;
pub mod richtext;
pub mod sections;
pub mod tenant;
pub mod validate;

pub use media::{MediaSource, StaticMedia};
pub use page::{compose_page, default_page};
pub use richtext::RichText;
pub use sections::PageData;
pub use tenant::{Tenant, TenantResolver};
pub use validate::{Validate, ValidationError};
