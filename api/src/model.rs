//! Bilingual content records and the language they are rendered in.

use serde::{Deserialize, Serialize};

/// Display language of the site. Arabic is the primary audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Arabic, Lang::English];

    /// Short code used for the document `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Arabic => "ar",
            Lang::English => "en",
        }
    }

    /// Locale folder of the Fluent bundle for this language.
    pub fn locale(self) -> &'static str {
        match self {
            Lang::Arabic => "ar",
            Lang::English => "en-US",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Lang::Arabic)
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Arabic => Lang::English,
            Lang::English => Lang::Arabic,
        }
    }

    /// Map a BCP-47 primary language subtag (`"ar"`, `"en"`) to a site language.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "ar" => Some(Lang::Arabic),
            "en" => Some(Lang::English),
            _ => None,
        }
    }
}

/// Pick the field for `lang`, falling back to the other language when the
/// preferred one is missing or blank.
pub fn localized<'a>(lang: Lang, english: &'a str, arabic: Option<&'a str>) -> &'a str {
    let arabic = arabic.filter(|s| !s.trim().is_empty());
    match lang {
        Lang::Arabic => arabic.unwrap_or(english),
        Lang::English if english.trim().is_empty() => arabic.unwrap_or(english),
        Lang::English => english,
    }
}

/// Remote collections served by the content service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Faq,
    GalleryImage,
    Program,
    Policy,
}

impl Entity {
    /// Collection name on the content service.
    pub fn name(self) -> &'static str {
        match self {
            Entity::Faq => "Faq",
            Entity::GalleryImage => "GalleryImage",
            Entity::Program => "Program",
            Entity::Policy => "Policy",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A record type that can be fetched from the content service.
pub trait ContentRecord: Sized + serde::de::DeserializeOwned {
    const ENTITY: Entity;

    fn id(&self) -> &str;

    /// Built-in list used whenever the service has nothing to offer.
    fn defaults() -> Vec<Self>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_ar: Option<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_ar: Option<String>,
}

impl FaqEntry {
    pub fn question(&self, lang: Lang) -> &str {
        localized(lang, &self.question, self.question_ar.as_deref())
    }

    pub fn answer(&self, lang: Lang) -> &str {
        localized(lang, &self.answer, self.answer_ar.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_ar: Option<String>,
}

impl GalleryImage {
    pub fn alt(&self, lang: Lang) -> &str {
        localized(lang, &self.alt, self.alt_ar.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub image: String,
}

impl Program {
    pub fn title(&self, lang: Lang) -> &str {
        localized(lang, &self.title, self.title_ar.as_deref())
    }

    pub fn description(&self, lang: Lang) -> &str {
        localized(lang, &self.description, self.description_ar.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_ar: Option<String>,
}

impl Policy {
    pub fn title(&self, lang: Lang) -> &str {
        localized(lang, &self.title, self.title_ar.as_deref())
    }

    pub fn text(&self, lang: Lang) -> &str {
        localized(lang, &self.text, self.text_ar.as_deref())
    }
}
