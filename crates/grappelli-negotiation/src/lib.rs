//! # Grappelli Negotiation
//!
//! **Content negotiation core**: given a request's accepted media types and
//! a value produced by a handler, pick the registered encoder the client
//! can accept and stream the encoded representation into the response body.
//!
//! The moving parts:
//! - [`ResponseEncoder`]: converts a value into bytes of one declared media
//!   type
//! - [`EncoderRegistry`]: ordered, append-only set of encoders, built once
//!   at startup and shared read-only across requests
//! - [`NegotiationResult`]: plain data (value + desired status) returned by
//!   a handler; [`NegotiationResult::execute`] is the single side-effecting
//!   step the transport boundary invokes
//! - [`JsonEncoder`] / [`XmlEncoder`]: the built-in encoders
//! - [`SpooledWriter`]: buffers output of non-incremental serializers in
//!   memory (spilling to a temp file) and drains it to the async body
//! - [`ProducesMetadata`]: what an endpoint advertises to documentation
//!   layers at route-registration time
//!
//! ## Example
//!
//! ```
//! use grappelli_http::{AcceptHeader, BodyBuffer, ResponseWriter, StatusCode};
//! use grappelli_negotiation::{negotiate, EncoderRegistry, JsonEncoder, XmlEncoder};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//! }
//!
//! // Startup: registration order is the tie-break among matching encoders
//! let mut registry = EncoderRegistry::new();
//! registry.register(JsonEncoder::new());
//! registry.register(XmlEncoder::new());
//!
//! // Per request
//! tokio_test::block_on(async {
//!     let accept = AcceptHeader::parse("application/json, application/xml");
//!     let body = BodyBuffer::new();
//!     let mut response = ResponseWriter::new(body.clone());
//!
//!     let product = Product { id: 1, name: "Product 1".to_string() };
//!     negotiate(product)
//!         .execute(&registry, &accept, &mut response)
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(response.status, StatusCode::OK);
//!     assert_eq!(body.contents(), r#"{"id":1,"name":"Product 1"}"#.as_bytes());
//! });
//! ```

pub mod encoder;
pub mod encoders;
pub mod metadata;
pub mod registry;
pub mod result;
pub mod spool;

pub use encoder::ResponseEncoder;
pub use encoders::json::JsonEncoder;
pub use encoders::xml::XmlEncoder;
pub use metadata::ProducesMetadata;
pub use registry::EncoderRegistry;
pub use result::{NegotiationResult, negotiate};
pub use spool::SpooledWriter;
