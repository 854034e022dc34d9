use serde_json::Value;

use super::{collection, items, nested, plain_text, prose, text, text_any};
use crate::defaults;
use crate::sections::{
    ContactData, ContactForm, FeatureItem, FeaturesData, ProcessData, ProcessStep, StepColor,
};

/// Map a CMS features block.
pub fn map_features(cms: &Value) -> FeaturesData {
    let default = defaults::features();
    FeaturesData {
        title: text(cms, "title").unwrap_or_else(|| default.title.clone()),
        subtitle: prose(cms, "subtitle").unwrap_or_else(|| default.subtitle.clone()),
        items: collection(items(cms, "items"), &default.items, map_feature_item),
    }
}

fn map_feature_item(entry: &Value, default: &FeatureItem) -> FeatureItem {
    FeatureItem {
        icon: text(entry, "icon").unwrap_or_else(|| default.icon.clone()),
        title: text(entry, "title").unwrap_or_else(|| default.title.clone()),
        description: plain_text(entry, "description")
            .unwrap_or_else(|| default.description.clone()),
    }
}

/// Map a CMS process block.
pub fn map_process(cms: &Value) -> ProcessData {
    let default = defaults::process();
    ProcessData {
        title: text(cms, "title").unwrap_or_else(|| default.title.clone()),
        subtitle: prose(cms, "subtitle").unwrap_or_else(|| default.subtitle.clone()),
        steps: collection(items(cms, "steps"), &default.steps, map_process_step),
    }
}

fn map_process_step(entry: &Value, default: &ProcessStep) -> ProcessStep {
    ProcessStep {
        number: text(entry, "number").unwrap_or_else(|| default.number.clone()),
        icon: text(entry, "icon").unwrap_or_else(|| default.icon.clone()),
        title: text(entry, "title").unwrap_or_else(|| default.title.clone()),
        description: plain_text(entry, "description")
            .unwrap_or_else(|| default.description.clone()),
        color: entry
            .get("color")
            .and_then(Value::as_str)
            .and_then(StepColor::parse)
            .unwrap_or(default.color),
    }
}

/// Map a CMS contact block.
pub fn map_contact(cms: &Value) -> ContactData {
    let default = defaults::contact();
    let form = nested(cms, "form");
    let label = |keys: &[&str], fallback: &String| {
        text_any(form, keys).unwrap_or_else(|| fallback.clone())
    };

    ContactData {
        title: text(cms, "title").unwrap_or_else(|| default.title.clone()),
        subtitle: prose(cms, "subtitle").unwrap_or_else(|| default.subtitle.clone()),
        form: ContactForm {
            name: label(&["name"], &default.form.name),
            email: label(&["email"], &default.form.email),
            phone: label(&["phone"], &default.form.phone),
            voice_prompt: label(&["voicePrompt", "voice_prompt"], &default.form.voice_prompt),
            voice_listening: label(
                &["voiceListening", "voice_listening"],
                &default.form.voice_listening,
            ),
            voice_transcript: label(
                &["voiceTranscript", "voice_transcript"],
                &default.form.voice_transcript,
            ),
            submit: label(&["submit"], &default.form.submit),
        },
    }
}
