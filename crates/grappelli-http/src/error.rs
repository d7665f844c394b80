//! Error types shared across the framework

use std::io;

/// Errors surfaced by encoding and buffering.
///
/// Negotiation outcomes (`204 No Content`, `406 Not Acceptable`) are not
/// errors; they are ordinary executions that set a status code. Everything
/// here is a per-request fault that propagates to the transport's generic
/// fault handling.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// An encoder was asked to encode an absent (null) value. Callers are
	/// required to resolve absent values to `204 No Content` before any
	/// encoder runs, so reaching an encoder with null is a contract
	/// violation.
	#[error("cannot encode an absent value")]
	AbsentValue,
	/// The value's shape cannot be represented by the serializer
	#[error("serialization failed: {0}")]
	Serialization(String),
	/// Buffering or body-write failure
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
	/// The request was aborted while encoding or draining
	#[error("request cancelled while writing response")]
	Cancelled,
}

impl Error {
	/// Status code reported to the transport's fault handling
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_http::Error;
	///
	/// assert_eq!(Error::AbsentValue.status_code(), 500);
	/// ```
	pub fn status_code(&self) -> u16 {
		500
	}
}

pub type Result<T> = std::result::Result<T, Error>;
