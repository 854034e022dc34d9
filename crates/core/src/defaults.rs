//! Built-in fallback content.
//!
//! Every section has a complete default so the pipeline can always hand a
//! fully populated [`PageData`] to the consumer, whatever the CMS returns.

use std::sync::LazyLock;

use crate::sections::{
    Brand, ContactData, ContactForm, FeatureItem, FeaturesData, FooterContact, FooterData,
    FooterLink, FooterLinks, HeaderData, HeroData, MenuItem, PageData, ProcessData, ProcessStep,
    Prose, Stat, StepColor,
};

static DEFAULT_PAGE: LazyLock<PageData> = LazyLock::new(|| PageData {
    header: build_header(),
    hero: build_hero(),
    features: build_features(),
    process: build_process(),
    contact: build_contact(),
    footer: build_footer(),
});

pub fn page() -> &'static PageData {
    &DEFAULT_PAGE
}

pub fn header() -> &'static HeaderData {
    &DEFAULT_PAGE.header
}

pub fn footer() -> &'static FooterData {
    &DEFAULT_PAGE.footer
}

pub fn hero() -> &'static HeroData {
    &DEFAULT_PAGE.hero
}

pub fn features() -> &'static FeaturesData {
    &DEFAULT_PAGE.features
}

pub fn process() -> &'static ProcessData {
    &DEFAULT_PAGE.process
}

pub fn contact() -> &'static ContactData {
    &DEFAULT_PAGE.contact
}

fn menu_item(label: &str, link: &str) -> MenuItem {
    MenuItem {
        label: label.to_string(),
        link: link.to_string(),
    }
}

fn build_header() -> HeaderData {
    HeaderData {
        logo_text: "ftiaxesite.gr".to_string(),
        menu: vec![
            menu_item("Χαρακτηριστικά", "features"),
            menu_item("Διαδικασία", "process"),
        ],
        cta: menu_item("Φτιάξε το site σου", "contact"),
    }
}

fn build_footer() -> FooterData {
    FooterData {
        brand: Brand {
            name: "ftiaxesite.gr".to_string(),
            tagline: "AI Websites σε 48 Ώρες".to_string(),
        },
        contact: FooterContact {
            title: "Επικοινωνία".to_string(),
            email: "info@ftiaxesite.gr".to_string(),
            phone: "+30 210 1234567".to_string(),
        },
        links: FooterLinks {
            title: "Χρήσιμα".to_string(),
            items: vec![
                FooterLink {
                    label: "Όροι Χρήσης".to_string(),
                    href: "/terms".to_string(),
                },
                FooterLink {
                    label: "Πολιτική Απορρήτου".to_string(),
                    href: "/privacy".to_string(),
                },
            ],
        },
        copyright: "© 2025 ftiaxesite.gr – Κατασκευή Ιστοσελίδων με AI".to_string(),
    }
}

fn build_hero() -> HeroData {
    let stat = |value: &str, label: &str| Stat {
        value: value.to_string(),
        label: label.to_string(),
    };
    HeroData {
        headline: "Φτιάξε το site σου σε 48 ώρες — από 250€".to_string(),
        subheadline: Prose::plain(
            "Με τη δύναμη της Τεχνητής Νοημοσύνης, δημιουργούμε γρήγορα, οικονομικά και επαγγελματικά websites.",
        ),
        cta: "Ξεκίνα τώρα".to_string(),
        image: "/modern-ai-website-development-illustration.jpg".to_string(),
        stats: vec![
            stat("48h", "Παράδοση"),
            stat("250€", "Από"),
            stat("AI", "Τεχνολογία"),
        ],
    }
}

fn build_features() -> FeaturesData {
    let item = |icon: &str, title: &str, description: &str| FeatureItem {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    };
    FeaturesData {
        title: "Γιατί να μας επιλέξεις".to_string(),
        subtitle: Prose::plain(
            "Όλα όσα χρειάζεσαι για να έχεις έτοιμο το website σου σε 48 ώρες",
        ),
        items: vec![
            item("clock", "Παράδοση σε 48 ώρες", "Το website σου είναι έτοιμο μέσα σε δύο μέρες."),
            item("euro", "Από 250€", "Χαμηλό κόστος χωρίς κρυφές χρεώσεις."),
            item("trendingUp", "SEO & Analytics", "Έτοιμο για Google με ενσωματωμένο Tag Manager."),
            item("shield", "Cookie Consent", "Συμμόρφωση με GDPR και απόλυτη διαφάνεια."),
            item("smartphone", "Responsive Design", "Λειτουργεί άψογα σε κινητά, tablet και υπολογιστές."),
            item("zap", "AI Technology", "Χρησιμοποιούμε Τεχνητή Νοημοσύνη για γρήγορη ανάπτυξη."),
        ],
    }
}

fn build_process() -> ProcessData {
    let step = |number: &str, icon: &str, title: &str, description: &str, color| ProcessStep {
        number: number.to_string(),
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        color,
    };
    ProcessData {
        title: "Πώς δουλεύουμε".to_string(),
        subtitle: Prose::plain(
            "Από την ιδέα στην online παρουσία — απλά, γρήγορα και αποτελεσματικά.",
        ),
        steps: vec![
            step("01", "fileText", "Συμπληρώνεις τη φόρμα", "Μας λες τι χρειάζεσαι.", StepColor::Teal),
            step(
                "02",
                "wand2",
                "Δημιουργούμε το σχέδιο",
                "Χρησιμοποιούμε AI για να σχεδιάσουμε το website σου.",
                StepColor::Navy,
            ),
            step(
                "03",
                "checkCircle2",
                "Παραδίδουμε σε 48 ώρες",
                "Παραλαμβάνεις έτοιμο site με SEO & Analytics.",
                StepColor::Teal,
            ),
        ],
    }
}

fn build_contact() -> ContactData {
    ContactData {
        title: "Ξεκίνα τη κατασκευή της σελίδας σου σήμερα".to_string(),
        subtitle: Prose::plain("Πες μας τι χρειάζεσαι — μίλησε το brief σου με ένα κλικ"),
        form: ContactForm {
            name: "Όνομα".to_string(),
            email: "Email".to_string(),
            phone: "Τηλέφωνο".to_string(),
            voice_prompt: "Πάτησε το μικρόφωνο και πες μας για το project σου".to_string(),
            voice_listening: "Σε ακούω... Μίλα τώρα!".to_string(),
            voice_transcript: "Αυτό που είπες:".to_string(),
            submit: "Αποστολή".to_string(),
        },
    }
}
