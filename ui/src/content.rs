//! Fixed page content: testimonials, features, services, blog articles.
//!
//! Records are built per language from the Fluent bundles so every string
//! has a single source of truth in `i18n/`.

use api::Lang;

use crate::t;

pub const HERO_VIDEO: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_1.mp4";
pub const HERO_POSTER: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_1-poster.png";

const IMG_SPEECH: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_2.png";
const IMG_DRAWING: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_3.png";
const IMG_FAMILY: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_4.png";
const IMG_PHYSIO: &str = "https://c.animaapp.com/mj6qv0f9TBg6RH/img/ai_5.png";

/// One parent quote shown by the testimonial carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialRecord {
    pub display_name: String,
    pub text: String,
}

pub fn testimonials(lang: Lang) -> Vec<TestimonialRecord> {
    vec![
        TestimonialRecord {
            display_name: t!(lang, "testimonial-1-name"),
            text: t!(lang, "testimonial-1-text"),
        },
        TestimonialRecord {
            display_name: t!(lang, "testimonial-2-name"),
            text: t!(lang, "testimonial-2-text"),
        },
        TestimonialRecord {
            display_name: t!(lang, "testimonial-3-name"),
            text: t!(lang, "testimonial-3-text"),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

/// "Why choose us" cards on the home page.
pub fn features(lang: Lang) -> Vec<Feature> {
    vec![
        Feature {
            icon: "♥",
            title: t!(lang, "home-feature-trust"),
            description: t!(lang, "home-feature-trust-desc"),
        },
        Feature {
            icon: "👥",
            title: t!(lang, "home-feature-team"),
            description: t!(lang, "home-feature-team-desc"),
        },
        Feature {
            icon: "📄",
            title: t!(lang, "home-feature-personalized"),
            description: t!(lang, "home-feature-personalized-desc"),
        },
        Feature {
            icon: "✔",
            title: t!(lang, "home-feature-family"),
            description: t!(lang, "home-feature-family-desc"),
        },
        Feature {
            icon: "🛡",
            title: t!(lang, "home-feature-safety"),
            description: t!(lang, "home-feature-safety-desc"),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: String,
    /// Card blurb on the home page.
    pub summary: String,
    /// Full paragraph on the services page.
    pub description: String,
    pub image: &'static str,
}

pub fn services(lang: Lang) -> Vec<Service> {
    vec![
        Service {
            icon: "💬",
            title: t!(lang, "service-speech"),
            summary: t!(lang, "service-speech-short"),
            description: t!(lang, "service-speech-long"),
            image: IMG_SPEECH,
        },
        Service {
            icon: "🧠",
            title: t!(lang, "service-sensory"),
            summary: t!(lang, "service-sensory-short"),
            description: t!(lang, "service-sensory-long"),
            image: IMG_DRAWING,
        },
        Service {
            icon: "🏃",
            title: t!(lang, "service-physical"),
            summary: t!(lang, "service-physical-short"),
            description: t!(lang, "service-physical-long"),
            image: IMG_PHYSIO,
        },
        Service {
            icon: "♥",
            title: t!(lang, "service-counseling"),
            summary: t!(lang, "service-counseling-short"),
            description: t!(lang, "service-counseling-long"),
            image: IMG_FAMILY,
        },
        Service {
            icon: "🩺",
            title: t!(lang, "service-physiotherapy"),
            summary: t!(lang, "service-physiotherapy-short"),
            description: t!(lang, "service-physiotherapy-long"),
            image: IMG_PHYSIO,
        },
        Service {
            icon: "📖",
            title: t!(lang, "service-education"),
            summary: t!(lang, "service-education-short"),
            description: t!(lang, "service-education-long"),
            image: IMG_DRAWING,
        },
    ]
}

/// Program teaser card on the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramPreview {
    pub title: String,
    pub description: String,
    pub image: &'static str,
}

pub fn program_previews(lang: Lang) -> Vec<ProgramPreview> {
    vec![
        ProgramPreview {
            title: t!(lang, "home-program-creative"),
            description: t!(lang, "home-program-creative-desc"),
            image: IMG_DRAWING,
        },
        ProgramPreview {
            title: t!(lang, "home-program-religious"),
            description: t!(lang, "home-program-religious-desc"),
            image: IMG_SPEECH,
        },
        ProgramPreview {
            title: t!(lang, "home-program-tech"),
            description: t!(lang, "home-program-tech-desc"),
            image: IMG_FAMILY,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub author: String,
    pub image: &'static str,
}

pub fn articles(lang: Lang) -> Vec<Article> {
    vec![
        Article {
            title: t!(lang, "blog-1-title"),
            excerpt: t!(lang, "blog-1-excerpt"),
            date: t!(lang, "blog-1-date"),
            author: t!(lang, "blog-1-author"),
            image: IMG_SPEECH,
        },
        Article {
            title: t!(lang, "blog-2-title"),
            excerpt: t!(lang, "blog-2-excerpt"),
            date: t!(lang, "blog-2-date"),
            author: t!(lang, "blog-2-author"),
            image: IMG_DRAWING,
        },
        Article {
            title: t!(lang, "blog-3-title"),
            excerpt: t!(lang, "blog-3-excerpt"),
            date: t!(lang, "blog-3-date"),
            author: t!(lang, "blog-3-author"),
            image: IMG_FAMILY,
        },
    ]
}

/// Icon for a program card, picked from keywords in its (either-language)
/// title. First matching group wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramIcon {
    Palette,
    BookHeart,
    Laptop,
    Users,
    Heart,
    Star,
}

const ICON_KEYWORDS: &[(ProgramIcon, &[&str])] = &[
    (ProgramIcon::Palette, &["إبداع", "Creative", "فن", "Art"]),
    (ProgramIcon::BookHeart, &["دين", "Religious", "قرآن", "Quran"]),
    (ProgramIcon::Laptop, &["تكنولوج", "Tech", "كمبيوتر", "Computer"]),
    (ProgramIcon::Users, &["اجتماع", "Social", "تواصل", "Communication"]),
    (ProgramIcon::Heart, &["حرك", "Physical", "رياض", "Sport"]),
    (ProgramIcon::Star, &["موسيق", "Music", "إيقاع", "Rhythm"]),
];

impl ProgramIcon {
    pub fn for_title(title: &str) -> Self {
        ICON_KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| title.contains(w)))
            .map(|(icon, _)| *icon)
            .unwrap_or(ProgramIcon::Palette)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ProgramIcon::Palette => "🎨",
            ProgramIcon::BookHeart => "📖",
            ProgramIcon::Laptop => "💻",
            ProgramIcon::Users => "👥",
            ProgramIcon::Heart => "♥",
            ProgramIcon::Star => "★",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_lists_have_expected_sizes() {
        for lang in Lang::ALL {
            assert_eq!(testimonials(lang).len(), 3);
            assert_eq!(features(lang).len(), 5);
            assert_eq!(services(lang).len(), 6);
            assert_eq!(program_previews(lang).len(), 3);
            assert_eq!(articles(lang).len(), 3);
        }
    }

    #[test]
    fn testimonials_are_localized() {
        let en = testimonials(Lang::English);
        let ar = testimonials(Lang::Arabic);
        assert_eq!(en[0].display_name, "Ahmed's Mother");
        assert_eq!(ar[0].display_name, "أم أحمد");
        assert_ne!(en[2].text, ar[2].text);
    }

    #[test]
    fn icon_follows_title_keywords() {
        assert_eq!(ProgramIcon::for_title("Creative Programs"), ProgramIcon::Palette);
        assert_eq!(ProgramIcon::for_title("برامج دينية"), ProgramIcon::BookHeart);
        assert_eq!(ProgramIcon::for_title("Technology Programs"), ProgramIcon::Laptop);
        assert_eq!(ProgramIcon::for_title("Social Programs"), ProgramIcon::Users);
        assert_eq!(ProgramIcon::for_title("برامج حركية"), ProgramIcon::Heart);
        assert_eq!(ProgramIcon::for_title("Music Programs"), ProgramIcon::Star);
        assert_eq!(ProgramIcon::for_title("Swimming"), ProgramIcon::Palette);
    }

    #[test]
    fn default_program_titles_map_to_distinct_icons() {
        let icons: Vec<_> = <api::Program as api::ContentRecord>::defaults()
            .iter()
            .map(|p| ProgramIcon::for_title(&p.title))
            .collect();
        assert_eq!(
            icons,
            vec![
                ProgramIcon::Palette,
                ProgramIcon::BookHeart,
                ProgramIcon::Laptop,
                ProgramIcon::Users,
                ProgramIcon::Heart,
                ProgramIcon::Star,
            ]
        );
    }
}
