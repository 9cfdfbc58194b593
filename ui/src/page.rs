//! The fixed set of site pages and their paths.

use api::Lang;

use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Programs,
    Sessions,
    Blog,
    Gallery,
    Faq,
    Contact,
    Policies,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Programs,
        Page::Sessions,
        Page::Blog,
        Page::Gallery,
        Page::Faq,
        Page::Contact,
        Page::Policies,
    ];

    /// Header navigation order (policies are linked from the footer only).
    pub const HEADER: [Page; 9] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Programs,
        Page::Sessions,
        Page::Blog,
        Page::Gallery,
        Page::Faq,
        Page::Contact,
    ];

    pub const FOOTER: [Page; 6] = [
        Page::Home,
        Page::Services,
        Page::Programs,
        Page::Blog,
        Page::Contact,
        Page::Policies,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Programs => "/programs",
            Page::Sessions => "/sessions",
            Page::Blog => "/blog",
            Page::Gallery => "/gallery",
            Page::Faq => "/faq",
            Page::Contact => "/contact",
            Page::Policies => "/policies",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Navigation label.
    pub fn label(self, lang: Lang) -> String {
        match self {
            Page::Home => t!(lang, "nav-home"),
            Page::About => t!(lang, "nav-about"),
            Page::Services => t!(lang, "nav-services"),
            Page::Programs => t!(lang, "nav-programs"),
            Page::Sessions => t!(lang, "nav-sessions"),
            Page::Blog => t!(lang, "nav-blog"),
            Page::Gallery => t!(lang, "nav-gallery"),
            Page::Faq => t!(lang, "nav-faq"),
            Page::Contact => t!(lang, "nav-contact"),
            Page::Policies => t!(lang, "nav-policies"),
        }
    }
}
