//! Response boundary object

use bytes::Bytes;
use http::{HeaderMap, StatusCode, header};
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

/// Type alias for the writable response body
pub type BodyWriter = Pin<Box<dyn AsyncWrite + Send>>;

/// The per-request response surface an execution writes into
///
/// The surrounding web stack constructs one of these per request, wiring
/// the body to its transport stream and the cancellation token to the
/// request's lifetime, then hands it to the negotiation result's
/// execution step.
pub struct ResponseWriter {
	pub status: StatusCode,
	pub headers: HeaderMap,
	body: BodyWriter,
	cancellation: CancellationToken,
}

impl ResponseWriter {
	/// Creates a response writer around a body destination
	///
	/// The status code defaults to `200 OK` and the cancellation token to a
	/// fresh, never-cancelled one.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::{BodyBuffer, ResponseWriter};
	/// use http::StatusCode;
	///
	/// let response = ResponseWriter::new(BodyBuffer::new());
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.headers.is_empty());
	/// ```
	pub fn new(body: impl AsyncWrite + Send + 'static) -> Self {
		Self {
			status: StatusCode::OK,
			headers: HeaderMap::new(),
			body: Box::pin(body),
			cancellation: CancellationToken::new(),
		}
	}

	/// Ties the response to the request's cancellation signal
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::{BodyBuffer, ResponseWriter};
	/// use tokio_util::sync::CancellationToken;
	///
	/// let token = CancellationToken::new();
	/// let response = ResponseWriter::new(BodyBuffer::new()).with_cancellation(token.clone());
	/// token.cancel();
	/// assert!(response.cancellation().is_cancelled());
	/// ```
	pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
		self.cancellation = cancellation;
		self
	}

	/// Sets the `Content-Type` header
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::{BodyBuffer, ResponseWriter};
	///
	/// let mut response = ResponseWriter::new(BodyBuffer::new());
	/// response.set_media_type("application/json");
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn set_media_type(&mut self, media_type: &str) {
		let value = header::HeaderValue::from_str(media_type)
			.unwrap_or_else(|_| header::HeaderValue::from_static("application/octet-stream"));
		self.headers.insert(header::CONTENT_TYPE, value);
	}

	/// The writable body destination
	pub fn body_mut(&mut self) -> &mut BodyWriter {
		&mut self.body
	}

	/// The request's cancellation signal
	pub fn cancellation(&self) -> &CancellationToken {
		&self.cancellation
	}
}

/// In-memory body destination for tests and demos
///
/// Clones share the same buffer, so a caller can keep one handle, hand the
/// other to a [`ResponseWriter`], and read back what was written.
///
/// # Examples
///
/// ```
/// use grappelli_http::{BodyBuffer, ResponseWriter};
///
/// let body = BodyBuffer::new();
/// let response = ResponseWriter::new(body.clone());
/// assert!(body.contents().is_empty());
/// # drop(response);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BodyBuffer(Arc<Mutex<Vec<u8>>>);

impl BodyBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of everything written so far
	pub fn contents(&self) -> Bytes {
		let guard = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
		Bytes::copy_from_slice(&guard)
	}
}

impl AsyncWrite for BodyBuffer {
	fn poll_write(
		self: Pin<&mut Self>,
		_cx: &mut Context<'_>,
		buf: &[u8],
	) -> Poll<io::Result<usize>> {
		let mut guard = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
		guard.extend_from_slice(buf);
		Poll::Ready(Ok(buf.len()))
	}

	fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
		Poll::Ready(Ok(()))
	}

	fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
		Poll::Ready(Ok(()))
	}
}
