//! Content provider for the Sunrise site.
//!
//! Pages that list FAQs, gallery images, programs and policies ask a remote
//! content service for their records. When the service has nothing to offer
//! or fails, the page still renders the built-in default list for the entity.

pub mod client;
pub mod defaults;
pub mod model;

pub use client::{resolve, ContentClient, ContentError};
pub use model::{localized, ContentRecord, Entity, FaqEntry, GalleryImage, Lang, Policy, Program};
