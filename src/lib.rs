//! # Grappelli
//!
//! **Content-negotiated responses for Rust web services**: a handler
//! returns a value, the client's `Accept` header picks the registered
//! encoder that renders it, and the encoded representation streams into
//! the response body.
//!
//! The library is deliberately decoupled from any specific web stack. The
//! surrounding framework supplies three things — the value to negotiate,
//! the request's accepted media types, and a response surface (status
//! code, headers, writable body, cancellation signal) — and grappelli does
//! the rest.
//!
//! ## Example
//!
//! ```
//! use grappelli::{
//!     AcceptHeader, BodyBuffer, EncoderRegistry, JsonEncoder, ResponseWriter, StatusCode,
//!     XmlEncoder, negotiate,
//! };
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     price: u32,
//! }
//!
//! // Once, at startup
//! let mut registry = EncoderRegistry::new();
//! registry.register(JsonEncoder::new());
//! registry.register(XmlEncoder::new());
//!
//! // Per request
//! tokio_test::block_on(async {
//!     let accept = AcceptHeader::parse("application/xml");
//!     let body = BodyBuffer::new();
//!     let mut response = ResponseWriter::new(body.clone());
//!
//!     let product = Product { id: 1, name: "Product 1".to_string(), price: 100 };
//!     negotiate(product)
//!         .execute(&registry, &accept, &mut response)
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(response.status, StatusCode::OK);
//!     assert_eq!(
//!         response.headers.get("content-type").unwrap().to_str().unwrap(),
//!         "application/xml"
//!     );
//! });
//! ```

pub use grappelli_http as http;
pub use grappelli_negotiation as negotiation;

pub use grappelli_http::{
	AcceptHeader, BodyBuffer, BodyWriter, Error, HeaderMap, MediaType, ResponseWriter, Result,
	StatusCode,
};
pub use grappelli_negotiation::{
	EncoderRegistry, JsonEncoder, NegotiationResult, ProducesMetadata, ResponseEncoder,
	SpooledWriter, XmlEncoder, negotiate,
};
