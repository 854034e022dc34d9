use serde::{Deserialize, Serialize};

use crate::richtext::RichText;

/// A rich-text-bearing field, pre-rendered both ways so consumers never
/// have to deal with the string-or-document ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prose {
    pub text: String,
    pub html: String,
}

impl Prose {
    /// Prose from a literal string. HTML output is the string itself.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            html: text.clone(),
            text,
        }
    }

    /// `None` when the value renders to blank text.
    pub fn from_rich_text(value: &RichText) -> Option<Self> {
        let text = value.to_plain_text();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            html: value.to_html(),
        })
    }
}

/// Fully resolved content for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub header: HeaderData,
    pub hero: HeroData,
    pub features: FeaturesData,
    pub process: ProcessData,
    pub contact: ContactData,
    pub footer: FooterData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    pub logo_text: String,
    pub menu: Vec<MenuItem>,
    pub cta: MenuItem,
}

/// A navigation entry. `link` is a section anchor or a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterData {
    pub brand: Brand,
    pub contact: FooterContact,
    pub links: FooterLinks,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterContact {
    pub title: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLinks {
    pub title: String,
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroData {
    pub headline: String,
    pub subheadline: Prose,
    pub cta: String,
    /// Absolute CMS URL, or a site-relative default.
    pub image: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesData {
    pub title: String,
    pub subtitle: Prose,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessData {
    pub title: String,
    pub subtitle: Prose,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: StepColor,
}

/// Accent colour of a process step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepColor {
    Teal,
    Navy,
}

impl StepColor {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "teal" => Some(StepColor::Teal),
            "navy" => Some(StepColor::Navy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactData {
    pub title: String,
    pub subtitle: Prose,
    pub form: ContactForm,
}

/// Labels for the contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub voice_prompt: String,
    pub voice_listening: String,
    pub voice_transcript: String,
    pub submit: String,
}
