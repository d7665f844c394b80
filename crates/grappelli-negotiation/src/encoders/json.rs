//! JSON response encoder

use async_trait::async_trait;
use grappelli_http::{BodyWriter, Error, MediaType, Result};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

use crate::encoder::ResponseEncoder;

/// Encoder producing `application/json`
///
/// Serializes the value's self-describing object/array form with
/// `serde_json`. The document is materialized in one buffer and written
/// with a single cancellation-guarded write, so no spooling is needed.
#[derive(Debug, Clone, Default)]
pub struct JsonEncoder {
	pretty: bool,
}

impl JsonEncoder {
	/// Creates a JSON encoder with compact output
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_negotiation::{JsonEncoder, ResponseEncoder};
	///
	/// let encoder = JsonEncoder::new();
	/// assert_eq!(encoder.media_type().essence(), "application/json");
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether output is pretty-printed
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}
}

#[async_trait]
impl ResponseEncoder for JsonEncoder {
	fn media_type(&self) -> MediaType {
		MediaType::new("application", "json")
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

		let encoded = if self.pretty {
			serde_json::to_vec_pretty(value)
		} else {
			serde_json::to_vec(value)
		}
		.map_err(|error| Error::Serialization(error.to_string()))?;

		tokio::select! {
			biased;
			_ = cancellation.cancelled() => Err(Error::Cancelled),
			result = async {
				body.write_all(&encoded).await?;
				body.flush().await
			} => result.map_err(Error::Io),
		}
	}
}
