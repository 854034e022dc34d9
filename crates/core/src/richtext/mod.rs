//! Rich-text normalization.
//!
//! CMS text fields arrive either as plain strings or as Lexical JSON
//! documents (`{"root": {"children": [...]}}`). [`RichText`] captures that
//! sum at the boundary and renders it to plain text or HTML. Rendering is
//! total: malformed nodes degrade to empty output.

mod html;
pub mod node;
mod plain;

use serde_json::Value;

pub use html::escape_html;
pub use node::Node;

/// A text field as delivered by the CMS.
#[derive(Debug, Clone, PartialEq)]
pub enum RichText {
    /// Missing, null, or a value of the wrong shape.
    Empty,
    /// A plain string, used verbatim.
    Plain(String),
    /// The top-level children of a rich-text document's `root`.
    Document(Vec<Node>),
}

impl RichText {
    /// Classify a raw JSON value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => RichText::Plain(s.clone()),
            Value::Object(obj) => match obj.get("root") {
                Some(root) => RichText::Document(
                    root.as_object().map(node::children_of).unwrap_or_default(),
                ),
                None => RichText::Empty,
            },
            _ => RichText::Empty,
        }
    }

    pub fn from_optional(value: Option<&Value>) -> Self {
        value.map(Self::from_value).unwrap_or(RichText::Empty)
    }

    pub fn is_document(&self) -> bool {
        matches!(self, RichText::Document(_))
    }

    /// Plain text with no markup. Strings are returned unchanged.
    pub fn to_plain_text(&self) -> String {
        match self {
            RichText::Empty => String::new(),
            RichText::Plain(s) => s.clone(),
            RichText::Document(nodes) => plain::render(nodes),
        }
    }

    /// Semantic HTML with escaped text. Strings are returned unchanged.
    pub fn to_html(&self) -> String {
        match self {
            RichText::Empty => String::new(),
            RichText::Plain(s) => s.clone(),
            RichText::Document(nodes) => html::render(nodes),
        }
    }
}

/// Render any CMS text value to plain text.
pub fn to_plain_text(value: &Value) -> String {
    RichText::from_value(value).to_plain_text()
}

/// Render any CMS text value to HTML.
pub fn to_html(value: &Value) -> String {
    RichText::from_value(value).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_wrong_types_are_empty() {
        assert_eq!(to_plain_text(&json!(null)), "");
        assert_eq!(to_plain_text(&json!(42)), "");
        assert_eq!(to_plain_text(&json!({"no_root": true})), "");
        assert_eq!(to_html(&json!([1, 2])), "");
        assert_eq!(to_html(&json!({"root": "broken"})), "");
    }

    #[test]
    fn strings_pass_through_unchanged() {
        for s in ["", "plain", "  spaced  ", "line\n\n\n\nbreaks", "<b>kept</b>"] {
            assert_eq!(to_plain_text(&json!(s)), s);
            assert_eq!(to_html(&json!(s)), s);
        }
    }

    #[test]
    fn simple_paragraph_document() {
        let doc = json!({"root": {"children": [
            {"type": "paragraph", "children": [{"type": "text", "text": "Hello"}]}
        ]}});
        assert_eq!(to_plain_text(&doc), "Hello");
        assert_eq!(to_html(&doc), "<p>Hello</p>");
        assert!(RichText::from_value(&doc).is_document());
    }

    #[test]
    fn two_paragraphs() {
        let doc = json!({"root": {"type": "root", "children": [
            {"type": "paragraph", "children": [{"type": "text", "text": "A"}]},
            {"type": "paragraph", "children": [{"type": "text", "text": "B"}]}
        ]}});
        assert_eq!(to_plain_text(&doc), "A\nB");
        assert_eq!(to_html(&doc), "<p>A</p><p>B</p>");
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = json!({"root": {"children": [
            {"type": "heading", "tag": "h1", "children": [{"type": "text", "text": "T", "format": 3}]},
            {"type": "paragraph", "children": [{"type": "text", "text": "body"}]}
        ]}});
        assert_eq!(to_html(&doc), to_html(&doc.clone()));
        assert_eq!(to_plain_text(&doc), "Tbody");
    }
}
