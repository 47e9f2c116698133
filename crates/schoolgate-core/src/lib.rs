//! # Schoolgate Core
//!
//! Foundational types for the Schoolgate permission engine.
//!
//! This crate provides the types shared by every other engine crate:
//!
//! - [`resource`]: hierarchical resource keys and segment-aware prefix matching
//! - [`keys`]: the capability key constants for the application taxonomy
//!
//! # Example
//!
//! ```ignore
//! use schoolgate_core::{ResourceKey, keys};
//!
//! let key = ResourceKey::new(keys::PEMBELAJARAN_NILAI_SISWA);
//! assert!(schoolgate_core::resource::prefix_matches(keys::PEMBELAJARAN, key.as_str()));
//! ```

pub mod keys;
pub mod resource;

// Re-export commonly used types at crate root
pub use resource::ResourceKey;
