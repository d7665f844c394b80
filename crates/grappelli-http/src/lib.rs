//! # Grappelli HTTP
//!
//! Boundary vocabulary between the negotiation core and the surrounding
//! web stack:
//!
//! - [`MediaType`] and [`AcceptHeader`]: parsed `Accept` header entries,
//!   preference-ordered by the request layer
//! - [`ResponseWriter`]: the mutable status code, headers, writable body
//!   stream and cancellation signal an execution writes into
//! - [`Error`] / [`Result`]: the shared error types used across the
//!   framework
//!
//! This crate defines no routing, no server loop and no request parsing;
//! those belong to whatever web stack hosts the negotiation core.

pub mod accept;
pub mod error;
pub mod media_type;
pub mod response;

pub use accept::AcceptHeader;
pub use error::{Error, Result};
pub use media_type::MediaType;
pub use response::{BodyBuffer, BodyWriter, ResponseWriter};

// Re-exported so downstream crates agree on the status code and header types
pub use http::{HeaderMap, StatusCode};
