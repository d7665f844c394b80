//! Accept header parsing

use http::HeaderMap;
use http::header::ACCEPT;

use crate::media_type::MediaType;

/// The request's accepted media types, in client preference order
///
/// The ordering is established once, when the header is parsed: descending
/// quality weight, stable for equal weights (so the client's textual order
/// is kept among ties). The negotiation core never re-sorts this list.
#[derive(Debug, Clone, Default)]
pub struct AcceptHeader {
	pub media_types: Vec<MediaType>,
}

impl AcceptHeader {
	/// Parses an `Accept` header value
	///
	/// Malformed entries are skipped rather than failing the whole header.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::AcceptHeader;
	///
	/// let accept = AcceptHeader::parse("text/html; q=0.9, application/json");
	/// assert_eq!(accept.media_types.len(), 2);
	/// // Sorted by quality, highest first
	/// assert_eq!(accept.media_types[0].essence(), "application/json");
	/// assert_eq!(accept.media_types[1].essence(), "text/html");
	/// ```
	pub fn parse(header: &str) -> Self {
		let mut media_types: Vec<MediaType> = header
			.split(',')
			.filter_map(|entry| MediaType::parse(entry.trim()))
			.collect();

		// Stable sort keeps the client's textual order among equal weights
		media_types.sort_by(|a, b| {
			b.quality
				.partial_cmp(&a.quality)
				.unwrap_or(std::cmp::Ordering::Equal)
		});

		Self { media_types }
	}

	/// Creates an empty accept list (no media type is acceptable)
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::AcceptHeader;
	///
	/// assert!(AcceptHeader::empty().is_empty());
	/// ```
	pub fn empty() -> Self {
		Self::default()
	}

	/// Collects every `Accept` header value from a request's header map
	///
	/// Requests may carry the header multiple times; all values contribute
	/// to one preference-ordered list. A request without an `Accept` header
	/// yields an empty list.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::AcceptHeader;
	/// use http::HeaderMap;
	/// use http::header::ACCEPT;
	///
	/// let mut headers = HeaderMap::new();
	/// headers.append(ACCEPT, "application/json".parse().unwrap());
	/// headers.append(ACCEPT, "application/xml; q=0.5".parse().unwrap());
	///
	/// let accept = AcceptHeader::from_headers(&headers);
	/// assert_eq!(accept.media_types.len(), 2);
	/// assert_eq!(accept.media_types[0].essence(), "application/json");
	/// ```
	pub fn from_headers(headers: &HeaderMap) -> Self {
		let combined = headers
			.get_all(ACCEPT)
			.iter()
			.filter_map(|value| value.to_str().ok())
			.collect::<Vec<_>>()
			.join(",");
		Self::parse(&combined)
	}

	pub fn is_empty(&self) -> bool {
		self.media_types.is_empty()
	}

	/// Iterates the accepted media types in preference order
	pub fn iter(&self) -> std::slice::Iter<'_, MediaType> {
		self.media_types.iter()
	}
}
