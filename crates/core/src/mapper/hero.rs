use serde_json::Value;

use super::{collection, items, prose, text};
use crate::defaults;
use crate::media::{resolve_media_url, MediaSource};
use crate::sections::{HeroData, Stat};

/// Map a CMS hero block.
///
/// A missing headline falls back to the page title before the default. The
/// image may be a URL, a populated media object or a numeric media ID; IDs
/// are looked up through `media`, and any failure keeps the default image.
pub async fn map_hero<M>(cms: &Value, page_title: Option<&str>, media: &M) -> HeroData
where
    M: MediaSource + ?Sized,
{
    let default = defaults::hero();

    let headline = text(cms, "headline")
        .or_else(|| {
            page_title
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| default.headline.clone());

    // `cta` is usually a bare label; some documents store a link object.
    let cta = text(cms, "cta")
        .or_else(|| cms.get("cta").and_then(|c| text(c, "label")))
        .unwrap_or_else(|| default.cta.clone());

    let image = resolve_media_url(cms.get("image"), media)
        .await
        .unwrap_or_else(|| default.image.clone());

    HeroData {
        headline,
        subheadline: prose(cms, "subheadline").unwrap_or_else(|| default.subheadline.clone()),
        cta,
        image,
        stats: collection(items(cms, "stats"), &default.stats, map_stat),
    }
}

fn map_stat(entry: &Value, default: &Stat) -> Stat {
    Stat {
        value: text(entry, "value").unwrap_or_else(|| default.value.clone()),
        label: text(entry, "label").unwrap_or_else(|| default.label.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::StaticMedia;
    use crate::validate::Validate;
    use async_trait::async_trait;
    use serde_json::json;

    fn cms_media() -> StaticMedia {
        StaticMedia::new("https://cms.example.com")
    }

    struct BrokenMedia;

    #[async_trait]
    impl MediaSource for BrokenMedia {
        fn media_base_url(&self) -> &str {
            "https://cms.example.com"
        }

        async fn media_url(&self, _id: u64) -> anyhow::Result<Option<String>> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn headline_kept_subheadline_defaulted() {
        let cms = json!({"headline": "Custom", "subheadline": null});
        let hero = map_hero(&cms, None, &cms_media()).await;
        assert_eq!(hero.headline, "Custom");
        assert_eq!(hero.subheadline, defaults::hero().subheadline);
        hero.validate().unwrap();
    }

    #[tokio::test]
    async fn wrongly_typed_fields_still_validate() {
        let media = cms_media();
        let cms = json!({
            "headline": 12,
            "subheadline": ["x"],
            "stats": {},
            "image": true,
            "cta": []
        });
        let hero = map_hero(&cms, None, &media).await;
        assert_eq!(hero.subheadline, defaults::hero().subheadline);
        assert_eq!(hero.image, defaults::hero().image);
        assert_eq!(hero.cta, defaults::hero().cta);
        assert_eq!(hero.stats, defaults::hero().stats);
        hero.validate().unwrap();

        for cms in [json!(7), json!(null), json!("hero"), json!([{"headline": "H"}])] {
            let hero = map_hero(&cms, None, &media).await;
            assert_eq!(&hero, defaults::hero());
            hero.validate().unwrap();
        }
    }

    #[tokio::test]
    async fn page_title_backs_up_headline() {
        let hero = map_hero(&json!({}), Some("Page title"), &cms_media()).await;
        assert_eq!(hero.headline, "Page title");

        let hero = map_hero(&json!({}), Some("  "), &cms_media()).await;
        assert_eq!(hero.headline, defaults::hero().headline);
    }

    #[tokio::test]
    async fn rich_subheadline_is_normalized() {
        let cms = json!({"subheadline": {"root": {"children": [
            {"type": "paragraph", "children": [{"type": "text", "text": "Γρήγορα & φθηνά"}]}
        ]}}});
        let hero = map_hero(&cms, None, &cms_media()).await;
        assert_eq!(hero.subheadline.text, "Γρήγορα & φθηνά");
        assert_eq!(hero.subheadline.html, "<p>Γρήγορα &amp; φθηνά</p>");
    }

    #[tokio::test]
    async fn image_shapes() {
        let media = cms_media();
        let from_path = map_hero(&json!({"image": "/media/a.jpg"}), None, &media).await;
        assert_eq!(from_path.image, "https://cms.example.com/media/a.jpg");

        let from_object = map_hero(
            &json!({"image": {"url": "https://cdn.example.com/b.jpg", "thumbnailURL": "/t.jpg"}}),
            None,
            &media,
        )
        .await;
        assert_eq!(from_object.image, "https://cdn.example.com/b.jpg");

        let missing = map_hero(&json!({"image": {}}), None, &media).await;
        assert_eq!(missing.image, defaults::hero().image);
    }

    #[tokio::test]
    async fn failed_media_lookup_keeps_default_image_and_other_fields() {
        let hero = map_hero(&json!({"headline": "H", "image": 42}), None, &BrokenMedia).await;
        assert_eq!(hero.image, defaults::hero().image);
        assert_eq!(hero.headline, "H");
    }

    #[tokio::test]
    async fn cta_and_stats() {
        let cms = json!({
            "cta": {"label": "Πάμε"},
            "stats": [{"value": 24, "label": "Ώρες"}, {"value": "5★"}]
        });
        let hero = map_hero(&cms, None, &cms_media()).await;
        assert_eq!(hero.cta, "Πάμε");
        assert_eq!(hero.stats.len(), 2);
        assert_eq!(hero.stats[0].value, "24");
        assert_eq!(hero.stats[1].label, defaults::hero().stats[1].label);

        let empty = map_hero(&json!({"stats": []}), None, &cms_media()).await;
        assert_eq!(empty.stats, defaults::hero().stats);
    }
}
