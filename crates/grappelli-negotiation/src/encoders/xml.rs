//! XML response encoder

use std::io;

use async_trait::async_trait;
use grappelli_http::{BodyWriter, Error, MediaType, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::encoder::ResponseEncoder;
use crate::spool::{DEFAULT_SPOOL_THRESHOLD, SpooledWriter};

/// Encoder producing `application/xml`
///
/// Emits an element tree honoring the value's structural contract: each
/// field becomes a named element (fields marked `#[serde(skip)]` on the
/// handler's type never appear), `null` fields become empty elements,
/// array fields repeat the field's element, and a top-level list repeats
/// the item element under the root.
///
/// The underlying serializer wants a synchronous, fully-materialized
/// destination, so the document is written through a [`SpooledWriter`] and
/// drained to the response body afterwards.
///
/// [`SpooledWriter`]: crate::spool::SpooledWriter
///
/// # Examples
///
/// ```
/// use grappelli_negotiation::{ResponseEncoder, XmlEncoder};
///
/// let encoder = XmlEncoder::new().root_tag("product");
/// assert_eq!(encoder.media_type().essence(), "application/xml");
/// ```
#[derive(Debug, Clone)]
pub struct XmlEncoder {
	root_tag: String,
	item_tag: String,
	spool_threshold: usize,
}

impl Default for XmlEncoder {
	fn default() -> Self {
		Self {
			root_tag: "response".to_string(),
			item_tag: "item".to_string(),
			spool_threshold: DEFAULT_SPOOL_THRESHOLD,
		}
	}
}

impl XmlEncoder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the root element name (default `response`)
	pub fn root_tag(mut self, tag: impl Into<String>) -> Self {
		self.root_tag = tag.into();
		self
	}

	/// Sets the element name for top-level list items (default `item`)
	pub fn item_tag(mut self, tag: impl Into<String>) -> Self {
		self.item_tag = tag.into();
		self
	}

	/// Sets the in-memory buffer size before spilling to a temp file
	pub fn spool_threshold(mut self, threshold: usize) -> Self {
		self.spool_threshold = threshold;
		self
	}

	fn write_element<W: io::Write>(
		&self,
		writer: &mut Writer<W>,
		tag: &str,
		value: &Value,
	) -> Result<()> {
		match value {
			Value::Null => writer
				.write_event(Event::Empty(BytesStart::new(tag)))
				.map_err(|error| Error::Serialization(error.to_string())),
			Value::Object(fields) => {
				self.write_start(writer, tag)?;
				for (name, field) in fields {
					match field {
						// Repeated elements of the field's name
						Value::Array(items) => {
							for item in items {
								self.write_element(writer, name, item)?;
							}
						}
						other => self.write_element(writer, name, other)?,
					}
				}
				self.write_end(writer, tag)
			}
			Value::Array(items) => {
				self.write_start(writer, tag)?;
				for item in items {
					self.write_element(writer, &self.item_tag, item)?;
				}
				self.write_end(writer, tag)
			}
			scalar => {
				self.write_start(writer, tag)?;
				let text = match scalar {
					Value::String(text) => text.clone(),
					other => other.to_string(),
				};
				writer
					.write_event(Event::Text(BytesText::new(&text)))
					.map_err(|error| Error::Serialization(error.to_string()))?;
				self.write_end(writer, tag)
			}
		}
	}

	fn write_start<W: io::Write>(&self, writer: &mut Writer<W>, tag: &str) -> Result<()> {
		writer
			.write_event(Event::Start(BytesStart::new(tag)))
			.map_err(|error| Error::Serialization(error.to_string()))
	}

	fn write_end<W: io::Write>(&self, writer: &mut Writer<W>, tag: &str) -> Result<()> {
		writer
			.write_event(Event::End(BytesEnd::new(tag)))
			.map_err(|error| Error::Serialization(error.to_string()))
	}
}

#[async_trait]
impl ResponseEncoder for XmlEncoder {
	fn media_type(&self) -> MediaType {
		MediaType::new("application", "xml")
	}

	async fn encode(
		&self,
		value: &Value,
		body: &mut BodyWriter,
		cancellation: &CancellationToken,
	) -> Result<()> {
		if value.is_null() {
			return Err(Error::AbsentValue);
		}

		let mut spool = SpooledWriter::with_threshold(self.spool_threshold);
		{
			let mut writer = Writer::new(&mut spool);
			self.write_element(&mut writer, &self.root_tag, value)?;
		}
		spool.drain_to(body, cancellation).await?;
		Ok(())
	}
}
