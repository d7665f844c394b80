//! Media type parsing and matching

use std::fmt;

/// A parsed media type such as `application/json`
///
/// Parameters (including the `q` weight) are parsed and retained, but
/// matching compares only the `type/subtype` essence. Wildcards are not
/// expanded: `*/*` only ever matches a literal `*/*`.
#[derive(Debug, Clone)]
pub struct MediaType {
	pub main_type: String,
	pub subtype: String,
	/// Client preference weight from the `q` parameter (default 1.0)
	pub quality: f32,
	/// Remaining parameters, in order of appearance (`q` excluded)
	pub parameters: Vec<(String, String)>,
}

impl MediaType {
	/// Creates a media type from its two base parts
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::MediaType;
	///
	/// let json = MediaType::new("application", "json");
	/// assert_eq!(json.essence(), "application/json");
	/// assert_eq!(json.quality, 1.0);
	/// ```
	pub fn new(main_type: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			main_type: main_type.into(),
			subtype: subtype.into(),
			quality: 1.0,
			parameters: Vec::new(),
		}
	}

	/// Parses a single `Accept` header entry
	///
	/// Returns `None` when the entry has no `type/subtype` shape. Type and
	/// subtype are lowercased; parameters keep their textual value.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::MediaType;
	///
	/// let parsed = MediaType::parse("Application/JSON; q=0.8; charset=utf-8").unwrap();
	/// assert_eq!(parsed.essence(), "application/json");
	/// assert_eq!(parsed.quality, 0.8);
	/// assert_eq!(parsed.parameters, vec![("charset".to_string(), "utf-8".to_string())]);
	///
	/// assert!(MediaType::parse("not-a-media-type").is_none());
	/// ```
	pub fn parse(entry: &str) -> Option<Self> {
		let mut segments = entry.split(';');
		let base = segments.next()?.trim();
		let (main_type, subtype) = base.split_once('/')?;
		let main_type = main_type.trim();
		let subtype = subtype.trim();
		if main_type.is_empty() || subtype.is_empty() {
			return None;
		}

		let mut media_type = Self::new(
			main_type.to_ascii_lowercase(),
			subtype.to_ascii_lowercase(),
		);

		for segment in segments {
			let Some((key, value)) = segment.split_once('=') else {
				continue;
			};
			let key = key.trim().to_ascii_lowercase();
			let value = value.trim();
			if key == "q" {
				media_type.quality = value.parse::<f32>().unwrap_or(1.0).clamp(0.0, 1.0);
			} else {
				media_type.parameters.push((key, value.to_string()));
			}
		}

		Some(media_type)
	}

	/// The `type/subtype` string with parameters stripped
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::MediaType;
	///
	/// let parsed = MediaType::parse("text/html; charset=utf-8").unwrap();
	/// assert_eq!(parsed.essence(), "text/html");
	/// ```
	pub fn essence(&self) -> String {
		format!("{}/{}", self.main_type, self.subtype)
	}

	/// Whether two media types denote the same base type
	///
	/// Comparison is by exact `type/subtype` string; parameters and quality
	/// weights are ignored, and wildcards are not given any special meaning.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::MediaType;
	///
	/// let produced = MediaType::new("application", "json");
	/// let accepted = MediaType::parse("application/json; q=0.1").unwrap();
	/// assert!(accepted.matches(&produced));
	///
	/// let any = MediaType::parse("*/*").unwrap();
	/// assert!(!any.matches(&produced));
	/// ```
	pub fn matches(&self, other: &MediaType) -> bool {
		self.main_type == other.main_type && self.subtype == other.subtype
	}
}

/// Equality follows matching: base type only
impl PartialEq for MediaType {
	fn eq(&self, other: &Self) -> bool {
		self.matches(other)
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.subtype)
	}
}
