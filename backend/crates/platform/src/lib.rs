//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Upstream service transport (bearer credentials, bounded timeouts,
//!   typed failures)
//! - Response cache-tag registry
//! - Cookie reading utilities

pub mod cache;
pub mod cookie;
pub mod upstream;
