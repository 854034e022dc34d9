//! CMS section to render-ready data.
//!
//! Every mapper accepts any JSON value and returns a complete structure.
//! Fallback is per field: a usable CMS value wins, anything else (missing,
//! null, blank, wrong type) takes the default. Collections are replaced
//! wholesale only when absent or empty; otherwise each element is mapped and
//! its missing fields come from the default element at the same position,
//! or the first default element past the end of the default list.

mod blocks;
mod hero;
mod layout;

use serde_json::Value;

use crate::richtext::RichText;
use crate::sections::Prose;

pub use blocks::{map_contact, map_features, map_process};
pub use hero::map_hero;
pub use layout::{map_footer, map_header};

/// A non-blank string field. Numbers are accepted and stringified.
pub(crate) fn text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The first usable string among several spellings of a field.
pub(crate) fn text_any(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(value, key))
}

pub(crate) static NULL: Value = Value::Null;

/// A nested object field.
pub(crate) fn object<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| v.is_object())
}

/// A nested object field, or `null` so lookups inside it fall through.
pub(crate) fn nested<'a>(value: &'a Value, key: &str) -> &'a Value {
    object(value, key).unwrap_or(&NULL)
}

/// A non-empty array field.
pub(crate) fn items<'a>(value: &'a Value, key: &str) -> Option<&'a [Value]> {
    value
        .get(key)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .map(Vec::as_slice)
}

/// A string-or-rich-text field, normalized to both forms.
pub(crate) fn prose(value: &Value, key: &str) -> Option<Prose> {
    Prose::from_rich_text(&RichText::from_optional(value.get(key)))
}

/// A string-or-rich-text field flattened to plain text.
pub(crate) fn plain_text(value: &Value, key: &str) -> Option<String> {
    let text = RichText::from_optional(value.get(key)).to_plain_text();
    (!text.trim().is_empty()).then_some(text)
}

/// Map a CMS collection element-wise against its defaults.
pub(crate) fn collection<T, F>(cms: Option<&[Value]>, defaults: &[T], map: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&Value, &T) -> T,
{
    let Some(first) = defaults.first() else {
        return Vec::new();
    };
    match cms {
        None => defaults.to_vec(),
        Some(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| map(entry, defaults.get(i).unwrap_or(first)))
            .collect(),
    }
}
