/// Completeness checks for mapped section data.
/// The mappers are total, so these should never fail on their output; they
/// exist to catch a broken default table or a mapper regression.
use thiserror::Error;

use crate::sections::{
    ContactData, FeaturesData, FooterData, HeaderData, HeroData, PageData, ProcessData, Prose,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{section}.{field} cannot be empty")]
    EmptyField { section: &'static str, field: String },
    #[error("{section}.{field} must have at least one entry")]
    EmptyCollection {
        section: &'static str,
        field: &'static str,
    },
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(section: &'static str, field: impl Into<String>, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            section,
            field: field.into(),
        });
    }
    Ok(())
}

fn require_prose(section: &'static str, field: &str, value: &Prose) -> Result<(), ValidationError> {
    require(section, format!("{field}.text"), &value.text)?;
    require(section, format!("{field}.html"), &value.html)
}

fn require_items<T>(
    section: &'static str,
    field: &'static str,
    items: &[T],
) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::EmptyCollection { section, field });
    }
    Ok(())
}

impl Validate for HeaderData {
    fn validate(&self) -> Result<(), ValidationError> {
        require("header", "logoText", &self.logo_text)?;
        require_items("header", "menu", &self.menu)?;
        for (i, item) in self.menu.iter().enumerate() {
            require("header", format!("menu[{i}].label"), &item.label)?;
            require("header", format!("menu[{i}].link"), &item.link)?;
        }
        require("header", "cta.label", &self.cta.label)?;
        require("header", "cta.link", &self.cta.link)
    }
}

impl Validate for FooterData {
    fn validate(&self) -> Result<(), ValidationError> {
        require("footer", "brand.name", &self.brand.name)?;
        require("footer", "brand.tagline", &self.brand.tagline)?;
        require("footer", "contact.title", &self.contact.title)?;
        require("footer", "contact.email", &self.contact.email)?;
        require("footer", "contact.phone", &self.contact.phone)?;
        require("footer", "links.title", &self.links.title)?;
        require_items("footer", "links.items", &self.links.items)?;
        for (i, link) in self.links.items.iter().enumerate() {
            require("footer", format!("links.items[{i}].label"), &link.label)?;
            require("footer", format!("links.items[{i}].href"), &link.href)?;
        }
        require("footer", "copyright", &self.copyright)
    }
}

impl Validate for HeroData {
    fn validate(&self) -> Result<(), ValidationError> {
        require("hero", "headline", &self.headline)?;
        require_prose("hero", "subheadline", &self.subheadline)?;
        require("hero", "cta", &self.cta)?;
        require("hero", "image", &self.image)?;
        require_items("hero", "stats", &self.stats)?;
        for (i, stat) in self.stats.iter().enumerate() {
            require("hero", format!("stats[{i}].value"), &stat.value)?;
            require("hero", format!("stats[{i}].label"), &stat.label)?;
        }
        Ok(())
    }
}

impl Validate for FeaturesData {
    fn validate(&self) -> Result<(), ValidationError> {
        require("features", "title", &self.title)?;
        require_prose("features", "subtitle", &self.subtitle)?;
        require_items("features", "items", &self.items)?;
        for (i, item) in self.items.iter().enumerate() {
            require("features", format!("items[{i}].icon"), &item.icon)?;
            require("features", format!("items[{i}].title"), &item.title)?;
            require("features", format!("items[{i}].description"), &item.description)?;
        }
        Ok(())
    }
}

impl Validate for ProcessData {
    fn validate(&self) -> Result<(), ValidationError> {
        require("process", "title", &self.title)?;
        require_prose("process", "subtitle", &self.subtitle)?;
        require_items("process", "steps", &self.steps)?;
        for (i, step) in self.steps.iter().enumerate() {
            require("process", format!("steps[{i}].number"), &step.number)?;
            require("process", format!("steps[{i}].icon"), &step.icon)?;
            require("process", format!("steps[{i}].title"), &step.title)?;
            require("process", format!("steps[{i}].description"), &step.description)?;
        }
        Ok(())
    }
}

impl Validate for ContactData {
    fn validate(&self) -> Result<(), ValidationError> {
        require("contact", "title", &self.title)?;
        require_prose("contact", "subtitle", &self.subtitle)?;
        let form = &self.form;
        require("contact", "form.name", &form.name)?;
        require("contact", "form.email", &form.email)?;
        require("contact", "form.phone", &form.phone)?;
        require("contact", "form.voicePrompt", &form.voice_prompt)?;
        require("contact", "form.voiceListening", &form.voice_listening)?;
        require("contact", "form.voiceTranscript", &form.voice_transcript)?;
        require("contact", "form.submit", &form.submit)
    }
}

impl Validate for PageData {
    fn validate(&self) -> Result<(), ValidationError> {
        self.header.validate()?;
        self.hero.validate()?;
        self.features.validate()?;
        self.process.validate()?;
        self.contact.validate()?;
        self.footer.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn empty_field_is_reported() {
        let mut hero = defaults::hero().clone();
        hero.headline = "  ".into();
        assert_eq!(
            hero.validate(),
            Err(ValidationError::EmptyField {
                section: "hero",
                field: "headline".into()
            })
        );
    }

    #[test]
    fn empty_collection_is_reported() {
        let mut footer = defaults::footer().clone();
        footer.links.items.clear();
        let err = footer.validate().unwrap_err();
        assert_eq!(err.to_string(), "footer.links.items must have at least one entry");
    }

    #[test]
    fn nested_item_field_is_named() {
        let mut process = defaults::process().clone();
        process.steps[1].icon.clear();
        let err = process.validate().unwrap_err();
        assert_eq!(err.to_string(), "process.steps[1].icon cannot be empty");
    }
}
