//! # Schoolgate Policy
//!
//! The default permission resolver: a pure, deterministic mapping from
//! `(role, resource key)` to a [`Permission`], encoding the built-in policy
//! matrix. No I/O, never fails; an unmatched role or key resolves to no
//! access (default-deny).
//!
//! [`Permission`]: schoolgate_models::Permission

pub mod prefix;
pub mod table;

pub use prefix::PrefixIndex;
pub use table::{PolicyTable, PolicyTableBuilder};
