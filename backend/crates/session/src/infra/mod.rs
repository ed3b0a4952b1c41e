//! Infrastructure Layer
//!
//! Read-only database access to the identity provider's session store.

pub mod postgres;

pub use postgres::PgSessionStore;
