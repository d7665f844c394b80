//! Endpoint metadata for documentation layers

use grappelli_http::StatusCode;

use crate::registry::EncoderRegistry;

/// What a negotiated endpoint statically advertises it can produce
///
/// Read once per route at registration time — after encoder registration
/// has completed — and handed to whatever metadata or documentation layer
/// the surrounding stack runs. The registry is the single source of truth
/// for the producible media types, so the advertised set always reflects
/// its contents at that moment.
///
/// # Examples
///
/// ```
/// use grappelli_http::StatusCode;
/// use grappelli_negotiation::{EncoderRegistry, JsonEncoder, ProducesMetadata, XmlEncoder};
///
/// struct Product;
///
/// let mut registry = EncoderRegistry::new();
/// registry.register(JsonEncoder::new());
/// registry.register(XmlEncoder::new());
///
/// let metadata = ProducesMetadata::of::<Product>(&registry);
/// assert_eq!(metadata.status, StatusCode::OK);
/// assert!(metadata.type_name.ends_with("Product"));
/// assert_eq!(metadata.media_types, vec!["application/json", "application/xml"]);
/// ```
#[derive(Debug, Clone)]
pub struct ProducesMetadata {
	/// The success status code the endpoint produces
	pub status: StatusCode,
	/// The declared type of the negotiated value
	pub type_name: &'static str,
	/// Producible media types, in registration order
	pub media_types: Vec<String>,
}

impl ProducesMetadata {
	/// Captures the advertised metadata for a value type
	pub fn of<T>(registry: &EncoderRegistry) -> Self {
		Self {
			status: StatusCode::OK,
			type_name: std::any::type_name::<T>(),
			media_types: registry
				.media_types()
				.iter()
				.map(|media_type| media_type.essence())
				.collect(),
		}
	}
}
