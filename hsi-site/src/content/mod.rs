//! Localized site content: flags, chapter directory views, page payloads

pub mod directory;
pub mod flags;
pub mod pages;
