//! Infrastructure Layer
//!
//! HTTP implementations of the domain gateway traits.

pub mod http;

pub use http::HttpScheduleGateway;
