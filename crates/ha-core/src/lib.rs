//! Core building blocks shared by Home Assistant Rust crates
//!
//! This crate provides the shutdown stage timeouts the core uses when it stops
//! and the `slugify` helper used to derive identifiers from user-facing names.

mod slugify;

pub mod shutdown;

pub use slugify::slugify;

/// Value returned by `slugify` when nothing of the input survives
pub const SLUG_UNKNOWN: &str = "unknown";
