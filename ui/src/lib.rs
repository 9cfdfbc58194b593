//! Shared UI crate for the Sunrise center site. Views, components, the
//! interactive engines and localization live here; platform crates only
//! supply the router.

pub mod config;
pub mod content;
pub mod core;
pub mod i18n;
pub mod page;
pub mod views;

pub mod components {
    pub mod site_footer;
    pub mod site_header;
    pub mod site_root;
    pub mod stats;
    pub mod testimonials;
    pub mod viewport;

    pub use site_footer::SiteFooter;
    pub use site_header::{register_nav, NavBuilder, SiteHeader};
    pub use site_root::{SiteRoot, Theme};
    pub use stats::StatsSection;
    pub use testimonials::TestimonialCarousel;
}

pub use api::Lang;
pub use page::Page;

#[cfg(test)]
mod tests;
