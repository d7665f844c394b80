//! Encoder registry and dispatch

use std::sync::Arc;

use grappelli_http::{AcceptHeader, MediaType};

use crate::encoder::ResponseEncoder;

/// Ordered collection of the encoders available for negotiation
///
/// The registry is append-only and meant to be populated during process
/// startup, before any request is served. Once registration is complete it
/// is shared read-only (typically behind an `Arc`) across request tasks;
/// with no further mutation, concurrent reads need no locking.
///
/// # Examples
///
/// ```
/// use grappelli_negotiation::{EncoderRegistry, JsonEncoder, XmlEncoder};
///
/// let mut registry = EncoderRegistry::new();
/// registry.register(JsonEncoder::new());
/// registry.register(XmlEncoder::new());
///
/// assert_eq!(registry.len(), 2);
/// let advertised: Vec<String> = registry.media_types().iter().map(|m| m.essence()).collect();
/// assert_eq!(advertised, vec!["application/json", "application/xml"]);
/// ```
#[derive(Default)]
pub struct EncoderRegistry {
	encoders: Vec<Arc<dyn ResponseEncoder>>,
}

impl EncoderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an encoder to the registration order
	///
	/// No deduplication is performed: registering the same producible media
	/// type twice creates two entries, and the earlier one always wins at
	/// match time.
	pub fn register(&mut self, encoder: impl ResponseEncoder + 'static) {
		let media_type = encoder.media_type();
		tracing::debug!(media_type = %media_type, "registered response encoder");
		self.encoders.push(Arc::new(encoder));
	}

	/// Read-only view of the encoders, in registration order
	pub fn encoders(&self) -> &[Arc<dyn ResponseEncoder>] {
		&self.encoders
	}

	/// The producible media types, in registration order
	///
	/// This is the set advertised to metadata and documentation layers;
	/// the registry is the single source of truth for what an endpoint can
	/// produce.
	pub fn media_types(&self) -> Vec<MediaType> {
		self.encoders
			.iter()
			.map(|encoder| encoder.media_type())
			.collect()
	}

	/// Selects the encoder for a request's accepted media types
	///
	/// Iterates in **registration order** and returns the first encoder
	/// that can satisfy *any* accepted entry. Registration order — not the
	/// client's preference order — is therefore the tie-break when several
	/// registered types are acceptable. Returns `None` when nothing
	/// matches.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::AcceptHeader;
	/// use grappelli_negotiation::{EncoderRegistry, JsonEncoder, XmlEncoder};
	///
	/// let mut registry = EncoderRegistry::new();
	/// registry.register(JsonEncoder::new());
	/// registry.register(XmlEncoder::new());
	///
	/// // Both types are acceptable; the first registered encoder wins
	/// let accept = AcceptHeader::parse("application/xml, application/json");
	/// let selected = registry.select(&accept).unwrap();
	/// assert_eq!(selected.media_type().essence(), "application/json");
	///
	/// assert!(registry.select(&AcceptHeader::parse("text/plain")).is_none());
	/// ```
	pub fn select(&self, accept: &AcceptHeader) -> Option<&dyn ResponseEncoder> {
		self.encoders
			.iter()
			.find(|encoder| accept.iter().any(|accepted| encoder.can_handle(accepted)))
			.map(|encoder| encoder.as_ref())
	}

	pub fn len(&self) -> usize {
		self.encoders.len()
	}

	pub fn is_empty(&self) -> bool {
		self.encoders.is_empty()
	}
}
