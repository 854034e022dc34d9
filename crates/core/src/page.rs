//! Whole-page composition.
//!
//! A page document carries its blocks under `sections` (or, in older
//! documents, `content.sections`). Documents without sections only
//! contribute `title`, `description` and `featuredImage` to the hero.

use serde_json::{Map, Value};

use crate::defaults;
use crate::mapper::{
    self, map_contact, map_features, map_footer, map_header, map_hero, map_process,
};
use crate::media::MediaSource;
use crate::richtext::RichText;
use crate::sections::PageData;

/// Build render-ready page data from an optional page document and an
/// optional shared layout document holding `header`/`footer`.
pub async fn compose_page<M>(page: Option<&Value>, shared: Option<&Value>, media: &M) -> PageData
where
    M: MediaSource + ?Sized,
{
    let doc = page.filter(|v| v.is_object()).unwrap_or(&mapper::NULL);
    let sections = section_root(doc);

    let header = layout_block(sections, shared, "header");
    let footer = layout_block(sections, shared, "footer");
    let hero = hero_with_page_fallbacks(section(sections, "hero"), doc);
    let page_title = doc.get("title").and_then(Value::as_str);

    PageData {
        header: map_header(header),
        hero: map_hero(&hero, page_title, media).await,
        features: map_features(section(sections, "features")),
        process: map_process(section(sections, "process")),
        contact: map_contact(section(sections, "contact")),
        footer: map_footer(footer),
    }
}

/// The default page, for when the CMS is unreachable.
pub fn default_page() -> PageData {
    defaults::page().clone()
}

fn section_root(doc: &Value) -> Option<&Value> {
    mapper::object(doc, "sections").or_else(|| {
        mapper::object(doc, "content").and_then(|content| mapper::object(content, "sections"))
    })
}

fn section<'a>(sections: Option<&'a Value>, key: &str) -> &'a Value {
    sections.map_or(&mapper::NULL, |s| mapper::nested(s, key))
}

/// Page sections win; the shared document fills in. It may hold the block
/// at the top level or under its own `sections`.
fn layout_block<'a>(
    sections: Option<&'a Value>,
    shared: Option<&'a Value>,
    key: &str,
) -> &'a Value {
    sections
        .and_then(|s| mapper::object(s, key))
        .or_else(|| {
            let shared = shared?;
            mapper::object(shared, key)
                .or_else(|| section_root(shared).and_then(|s| mapper::object(s, key)))
        })
        .unwrap_or(&mapper::NULL)
}

/// Copy the hero block, filling a blank subheadline from the page
/// description and a missing image from the featured image.
fn hero_with_page_fallbacks(hero: &Value, doc: &Value) -> Value {
    let mut merged: Map<String, Value> = hero.as_object().cloned().unwrap_or_default();

    let subheadline_blank = RichText::from_optional(merged.get("subheadline"))
        .to_plain_text()
        .trim()
        .is_empty();
    if subheadline_blank {
        if let Some(description) = doc.get("description").filter(|d| !d.is_null()) {
            merged.insert("subheadline".to_string(), description.clone());
        }
    }

    let image_missing = merged.get("image").map_or(true, is_blank);
    if image_missing {
        if let Some(image) = doc.get("featuredImage").filter(|i| !is_blank(i)) {
            merged.insert("image".to_string(), image.clone());
        }
    }

    Value::Object(merged)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Object(obj) => obj.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::StaticMedia;
    use crate::validate::Validate;
    use serde_json::json;

    fn media() -> StaticMedia {
        StaticMedia::new("https://cms.example.com")
    }

    #[tokio::test]
    async fn no_document_gives_defaults() {
        let page = compose_page(None, None, &media()).await;
        assert_eq!(&page, defaults::page());

        let page = compose_page(Some(&json!("garbage")), None, &media()).await;
        assert_eq!(&page, defaults::page());
    }

    #[tokio::test]
    async fn sections_are_mapped_field_by_field() {
        let doc = json!({
            "title": "Αρχική",
            "sections": {
                "hero": {"headline": "Custom"},
                "features": {"items": []},
                "header": {"logoText": "brand.gr"}
            }
        });
        let page = compose_page(Some(&doc), None, &media()).await;
        assert_eq!(page.hero.headline, "Custom");
        assert_eq!(page.hero.subheadline, defaults::hero().subheadline);
        assert_eq!(page.features.items, defaults::features().items);
        assert_eq!(page.header.logo_text, "brand.gr");
        assert_eq!(page.footer, *defaults::footer());
        page.validate().unwrap();
    }

    #[tokio::test]
    async fn legacy_document_builds_hero_from_page_fields() {
        let doc = json!({
            "title": "Παλιά σελίδα",
            "description": "Περιγραφή",
            "featuredImage": {"url": "/media/old.png"}
        });
        let page = compose_page(Some(&doc), None, &media()).await;
        assert_eq!(page.hero.headline, "Παλιά σελίδα");
        assert_eq!(page.hero.subheadline.text, "Περιγραφή");
        assert_eq!(page.hero.image, "https://cms.example.com/media/old.png");
        assert_eq!(page.hero.stats, defaults::hero().stats);
        assert_eq!(page.features, *defaults::features());
    }

    #[tokio::test]
    async fn content_sections_are_honoured() {
        let doc = json!({"content": {"sections": {"process": {"title": "Βήματα"}}}});
        let page = compose_page(Some(&doc), None, &media()).await;
        assert_eq!(page.process.title, "Βήματα");
    }

    #[tokio::test]
    async fn hero_fields_beat_page_fields() {
        let doc = json!({
            "title": "Title",
            "description": "Description",
            "featuredImage": "/media/featured.png",
            "sections": {
                "hero": {"headline": "Hero", "subheadline": "Sub", "image": "/media/hero.png"}
            }
        });
        let page = compose_page(Some(&doc), None, &media()).await;
        assert_eq!(page.hero.headline, "Hero");
        assert_eq!(page.hero.subheadline.text, "Sub");
        assert_eq!(page.hero.image, "https://cms.example.com/media/hero.png");
    }

    #[tokio::test]
    async fn shared_layout_fills_missing_header_and_footer() {
        let doc = json!({"sections": {"footer": {"copyright": "© page"}}});
        let shared = json!({
            "header": {"logoText": "shared.gr"},
            "footer": {"copyright": "© shared"}
        });
        let page = compose_page(Some(&doc), Some(&shared), &media()).await;
        assert_eq!(page.header.logo_text, "shared.gr");
        assert_eq!(page.footer.copyright, "© page");

        let nested_shared = json!({"sections": {"header": {"logoText": "nested.gr"}}});
        let page = compose_page(None, Some(&nested_shared), &media()).await;
        assert_eq!(page.header.logo_text, "nested.gr");
    }
}
