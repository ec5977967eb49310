//! hsi-site — Happy Society International site service
//!
//! Backend for the multilingual marketing and membership-recruitment
//! site. Serves localized page payloads in seven languages, the chapter
//! directory with its availability fallback, and the lead-capture
//! endpoints (newsletter, membership, chapter and partnership
//! applications, contact form) backed by the hosted data store.
//!
//! # Module structure
//!
//! ```text
//! hsi-site/src/
//! ├── api/       # HTTP routes and handlers
//! ├── content/   # flags, directory views, page payload assembly
//! ├── i18n/      # locales, message catalog, paragraph segmentation
//! ├── store/     # REST client for the hosted data store
//! ├── mailto.rs  # application email links
//! ├── config.rs  # environment configuration
//! ├── state.rs   # shared application state
//! └── error.rs   # service-layer error bridge
//! ```

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod mailto;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;
