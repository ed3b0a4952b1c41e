//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (ID types, etc.)
//! - The per-request context (credential + identity claims) that every
//!   component receives as an explicit argument
//! - Bilingual text with locale resolution
//! - The pagination contract shared by every paginated view
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod context;
pub mod id;
pub mod page;
pub mod text;
