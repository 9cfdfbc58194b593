//! Platform-agnostic engines behind the interactive parts of the site.

pub mod booking;
pub mod carousel;
pub mod counter;
pub mod platform;
pub mod timing;
pub mod trigger;
