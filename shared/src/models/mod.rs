//! Data models
//!
//! Entities mirror the hosted data store tables one-to-one and are
//! shared between the HTTP API and the store client. All IDs are
//! store-assigned strings; `*Application`/`*Registration` structs are
//! the insert payloads with store-defaulted columns omitted.

pub mod chapter;
pub mod contact;
pub mod member;
pub mod newsletter;
pub mod partner;

// Re-exports
pub use chapter::*;
pub use contact::*;
pub use member::*;
pub use newsletter::*;
pub use partner::*;
