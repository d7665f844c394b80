//! Deferred negotiated response

use grappelli_http::{AcceptHeader, Error, ResponseWriter, Result, StatusCode};
use serde::Serialize;

use crate::registry::EncoderRegistry;

/// Wraps a handler's value for later negotiated rendering
///
/// The status code defaults to `200 OK` and may be adjusted before
/// execution.
///
/// # Examples
///
/// ```
/// use grappelli_http::StatusCode;
/// use grappelli_negotiation::negotiate;
///
/// let result = negotiate("created").with_status(StatusCode::CREATED);
/// assert_eq!(result.status, StatusCode::CREATED);
/// ```
pub fn negotiate<T: Serialize>(value: T) -> NegotiationResult<T> {
	NegotiationResult {
		value,
		status: StatusCode::OK,
	}
}

/// A deferred response bound to the negotiation process
///
/// This is plain data: the handler's value plus the status code to use on
/// success. The side effects happen in [`execute`], which the transport
/// boundary invokes exactly once — enforced by consuming `self`.
///
/// A value serializing to JSON null (for example `None`) means "no body"
/// and resolves to `204 No Content` without consulting any encoder.
///
/// [`execute`]: NegotiationResult::execute
pub struct NegotiationResult<T> {
	value: T,
	/// Status code used when an encoder is selected (default `200 OK`)
	pub status: StatusCode,
}

impl<T: Serialize> NegotiationResult<T> {
	/// Sets the status code used when encoding succeeds
	pub fn with_status(mut self, status: StatusCode) -> Self {
		self.status = status;
		self
	}

	/// Runs the negotiation and writes the response
	///
	/// Outcomes:
	/// - absent value → status `204 No Content`, no body
	/// - no registered encoder satisfies any accepted media type → status
	///   `406 Not Acceptable`, no body
	/// - otherwise → the configured status, `Content-Type` set to the
	///   selected encoder's media type, body produced by the encoder
	///
	/// The first two are ordinary results, not errors. Serialization and
	/// buffering failures propagate as [`Error`] for the transport's
	/// generic fault handling; nothing is retried.
	pub async fn execute(
		self,
		registry: &EncoderRegistry,
		accept: &AcceptHeader,
		response: &mut ResponseWriter,
	) -> Result<()> {
		let value = serde_json::to_value(&self.value)
			.map_err(|error| Error::Serialization(error.to_string()))?;

		if value.is_null() {
			response.status = StatusCode::NO_CONTENT;
			tracing::debug!("negotiated value is absent, responding 204");
			return Ok(());
		}

		let Some(encoder) = registry.select(accept) else {
			response.status = StatusCode::NOT_ACCEPTABLE;
			tracing::debug!("no encoder satisfies the accepted media types, responding 406");
			return Ok(());
		};

		let media_type = encoder.media_type();
		response.status = self.status;
		response.set_media_type(&media_type.essence());
		tracing::debug!(media_type = %media_type, "encoding negotiated response");

		let cancellation = response.cancellation().clone();
		match encoder.encode(&value, response.body_mut(), &cancellation).await {
			Ok(()) => Ok(()),
			Err(error) => {
				tracing::warn!(%error, "response encoding failed");
				Err(error)
			}
		}
	}
}
