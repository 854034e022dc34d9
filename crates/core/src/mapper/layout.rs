use serde_json::Value;

use super::{collection, items, nested, text, text_any};
use crate::defaults;
use crate::sections::{
    Brand, FooterContact, FooterData, FooterLink, FooterLinks, HeaderData, MenuItem,
};

/// Map a CMS header block.
pub fn map_header(cms: &Value) -> HeaderData {
    let default = defaults::header();
    let cta = nested(cms, "cta");

    HeaderData {
        logo_text: text_any(cms, &["logoText", "logo_text"])
            .unwrap_or_else(|| default.logo_text.clone()),
        menu: collection(items(cms, "menu"), &default.menu, map_menu_item),
        cta: MenuItem {
            label: text(cta, "label").unwrap_or_else(|| default.cta.label.clone()),
            link: text(cta, "link").unwrap_or_else(|| default.cta.link.clone()),
        },
    }
}

fn map_menu_item(entry: &Value, default: &MenuItem) -> MenuItem {
    MenuItem {
        label: text(entry, "label").unwrap_or_else(|| default.label.clone()),
        link: text_any(entry, &["link", "href", "url"]).unwrap_or_else(|| default.link.clone()),
    }
}

/// Map a CMS footer block.
pub fn map_footer(cms: &Value) -> FooterData {
    let default = defaults::footer();
    let brand = nested(cms, "brand");
    let contact = nested(cms, "contact");
    let links = nested(cms, "links");

    FooterData {
        brand: Brand {
            name: text(brand, "name").unwrap_or_else(|| default.brand.name.clone()),
            tagline: text(brand, "tagline").unwrap_or_else(|| default.brand.tagline.clone()),
        },
        contact: FooterContact {
            title: text(contact, "title").unwrap_or_else(|| default.contact.title.clone()),
            email: text(contact, "email").unwrap_or_else(|| default.contact.email.clone()),
            phone: text(contact, "phone").unwrap_or_else(|| default.contact.phone.clone()),
        },
        links: FooterLinks {
            title: text(links, "title").unwrap_or_else(|| default.links.title.clone()),
            items: collection(items(links, "items"), &default.links.items, map_footer_link),
        },
        copyright: text(cms, "copyright").unwrap_or_else(|| default.copyright.clone()),
    }
}

fn map_footer_link(entry: &Value, default: &FooterLink) -> FooterLink {
    FooterLink {
        label: text(entry, "label").unwrap_or_else(|| default.label.clone()),
        href: text_any(entry, &["href", "link", "url"]).unwrap_or_else(|| default.href.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Validate;
    use serde_json::json;

    #[test]
    fn header_from_nothing_is_default() {
        for input in [json!(null), json!({}), json!("header"), json!([1, 2])] {
            let header = map_header(&input);
            assert_eq!(&header, defaults::header());
            header.validate().unwrap();
        }
    }

    #[test]
    fn header_accepts_both_logo_spellings() {
        assert_eq!(map_header(&json!({"logoText": "camel"})).logo_text, "camel");
        assert_eq!(map_header(&json!({"logo_text": "snake"})).logo_text, "snake");
    }

    #[test]
    fn header_menu_items_default_per_field() {
        let header = map_header(&json!({
            "menu": [{"label": "Τιμές"}, {"link": "faq"}, {"label": "Blog", "link": "/blog"}],
            "cta": {"label": "Κλείσε ραντεβού"}
        }));
        assert_eq!(header.menu.len(), 3);
        assert_eq!(header.menu[0].label, "Τιμές");
        assert_eq!(header.menu[0].link, "features");
        assert_eq!(header.menu[1].label, "Διαδικασία");
        assert_eq!(header.menu[1].link, "faq");
        assert_eq!(header.menu[2].link, "/blog");
        assert_eq!(header.cta.label, "Κλείσε ραντεβού");
        assert_eq!(header.cta.link, "contact");
    }

    #[test]
    fn footer_partial_content() {
        let footer = map_footer(&json!({
            "brand": {"name": "Κάτι Άλλο"},
            "contact": "not an object",
            "links": {"items": []},
            "copyright": ""
        }));
        assert_eq!(footer.brand.name, "Κάτι Άλλο");
        assert_eq!(footer.brand.tagline, defaults::footer().brand.tagline);
        assert_eq!(footer.contact, defaults::footer().contact);
        assert_eq!(footer.links.items, defaults::footer().links.items);
        assert_eq!(footer.copyright, defaults::footer().copyright);
        footer.validate().unwrap();
    }

    #[test]
    fn footer_links_map_element_wise() {
        let footer = map_footer(&json!({
            "links": {"title": "Links", "items": [{"label": "Cookies", "href": "/cookies"}]}
        }));
        assert_eq!(footer.links.title, "Links");
        assert_eq!(
            footer.links.items,
            vec![FooterLink {
                label: "Cookies".into(),
                href: "/cookies".into()
            }]
        );
    }
}
