//! Response encoder contract

use async_trait::async_trait;
use grappelli_http::{BodyWriter, MediaType, Result};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// A component producing the byte representation of a value in one
/// specific media type
///
/// Encoders are immutable once registered. Each contributes exactly one
/// producible media type to the registry's advertised set; two encoders
/// may produce the same media type, in which case the first one registered
/// wins at match time.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use grappelli_http::{BodyWriter, MediaType, Result};
/// use grappelli_negotiation::ResponseEncoder;
/// use serde_json::Value;
/// use tokio::io::AsyncWriteExt;
/// use tokio_util::sync::CancellationToken;
///
/// struct PlainTextEncoder;
///
/// #[async_trait]
/// impl ResponseEncoder for PlainTextEncoder {
///     fn media_type(&self) -> MediaType {
///         MediaType::new("text", "plain")
///     }
///
///     async fn encode(
///         &self,
///         value: &Value,
///         body: &mut BodyWriter,
///         _cancellation: &CancellationToken,
///     ) -> Result<()> {
///         body.write_all(value.to_string().as_bytes()).await?;
///         body.flush().await?;
///         Ok(())
///     }
/// }
///
/// let encoder = PlainTextEncoder;
/// assert!(encoder.can_handle(&MediaType::parse("text/plain; q=0.3").unwrap()));
/// assert!(!encoder.can_handle(&MediaType::parse("text/html").unwrap()));
/// ```
#[async_trait]
pub trait ResponseEncoder: Send + Sync {
	/// The single media type this encoder emits
	fn media_type(&self) -> MediaType;

	/// Whether this encoder can satisfy an accepted media type
	///
	/// Matching is by exact `type/subtype` comparison; wildcards and
	/// parameters are not considered.
	fn can_handle(&self, accepted: &MediaType) -> bool {
		accepted.matches(&self.media_type())
	}

	/// Writes a complete, valid encoding of `value` into `body`
	///
	/// `value` must not be JSON null: absent values are resolved to
	/// `204 No Content` before any encoder is invoked, so encoders report
	/// [`Error::AbsentValue`] when handed one. Cancellation must abort
	/// writes promptly, without flushing partial output past the buffering
	/// boundary.
	///
	/// [`Error::AbsentValue`]: grappelli_http::Error::AbsentValue
	async fn encode(
		&self,
		value: &Value,
		body: &mut BodyWriter,
		cancellation: &CancellationToken,
	) -> Result<()>;
}
