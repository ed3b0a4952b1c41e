//! Infrastructure Layer
//!
//! HTTP gateway and read-only identity-store implementations.

pub mod http;
pub mod postgres;

pub use http::HttpGraduationGateway;
pub use postgres::PgTaRegistry;
