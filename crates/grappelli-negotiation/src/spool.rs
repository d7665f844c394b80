//! Buffering adapter between blocking serializers and async response bodies

use std::io::{self, Seek, SeekFrom, Write};

use grappelli_http::{Error, Result};
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

/// Default in-memory buffer size before spilling to a temporary file
pub const DEFAULT_SPOOL_THRESHOLD: usize = 32 * 1024;

const DRAIN_CHUNK: usize = 8 * 1024;

enum Spool {
	Memory(Vec<u8>),
	File { file: std::fs::File, len: u64 },
}

/// Write destination for serializers that need a fully-materialized output
///
/// Some serialization backends are not incremental-async-friendly: they
/// want a synchronous [`io::Write`] destination and produce the whole
/// document in one go. `SpooledWriter` gives them one, buffering in memory
/// up to a threshold and spilling to an anonymous temporary file beyond
/// it, then [`drain_to`] copies everything — byte-identical, in order,
/// exactly once — into the real async response body.
///
/// The temporary file is unlinked at creation ([`tempfile::tempfile`]), so
/// every exit path — success, failure or cancellation — releases its
/// storage when the spool is dropped.
///
/// [`drain_to`]: SpooledWriter::drain_to
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use grappelli_negotiation::SpooledWriter;
///
/// let mut spool = SpooledWriter::with_threshold(8);
/// spool.write_all(b"0123456789").unwrap();
/// assert!(spool.is_spilled());
/// assert_eq!(spool.len(), 10);
/// ```
pub struct SpooledWriter {
	threshold: usize,
	spool: Spool,
}

impl Default for SpooledWriter {
	fn default() -> Self {
		Self::with_threshold(DEFAULT_SPOOL_THRESHOLD)
	}
}

impl SpooledWriter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_threshold(threshold: usize) -> Self {
		Self {
			threshold,
			spool: Spool::Memory(Vec::new()),
		}
	}

	/// Total bytes buffered so far
	pub fn len(&self) -> u64 {
		match &self.spool {
			Spool::Memory(buffer) => buffer.len() as u64,
			Spool::File { len, .. } => *len,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Whether the buffer has spilled to temporary storage
	pub fn is_spilled(&self) -> bool {
		matches!(self.spool, Spool::File { .. })
	}

	fn spill(&mut self) -> io::Result<()> {
		if let Spool::Memory(buffer) = &mut self.spool {
			let mut file = tempfile::tempfile()?;
			file.write_all(buffer)?;
			tracing::debug!(
				buffered = buffer.len(),
				"spooled response buffer spilled to temporary file"
			);
			let len = buffer.len() as u64;
			self.spool = Spool::File { file, len };
		}
		Ok(())
	}

	/// Copies the buffered bytes to the response body
	///
	/// Cancellation is checked between chunks; a cancelled drain stops
	/// promptly with [`Error::Cancelled`], leaving the destination
	/// truncated at a chunk boundary and releasing the temporary storage.
	/// Returns the number of bytes copied.
	pub async fn drain_to<W>(self, dst: &mut W, cancellation: &CancellationToken) -> Result<u64>
	where
		W: AsyncWrite + Unpin + ?Sized,
	{
		match self.spool {
			Spool::Memory(buffer) => {
				tokio::select! {
					biased;
					_ = cancellation.cancelled() => return Err(Error::Cancelled),
					result = async {
						dst.write_all(&buffer).await?;
						dst.flush().await
					} => result?,
				}
				Ok(buffer.len() as u64)
			}
			Spool::File { mut file, len } => {
				file.seek(SeekFrom::Start(0))?;
				let mut reader = tokio::fs::File::from_std(file);
				let mut chunk = vec![0u8; DRAIN_CHUNK];
				let mut copied = 0u64;
				loop {
					if cancellation.is_cancelled() {
						// dropping the reader releases the unlinked temp file
						return Err(Error::Cancelled);
					}
					let read = reader.read(&mut chunk).await?;
					if read == 0 {
						break;
					}
					dst.write_all(&chunk[..read]).await?;
					copied += read as u64;
				}
				dst.flush().await?;
				debug_assert_eq!(copied, len);
				Ok(copied)
			}
		}
	}
}

impl Write for SpooledWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if let Spool::Memory(buffer) = &self.spool {
			if buffer.len() + buf.len() > self.threshold {
				self.spill()?;
			}
		}
		match &mut self.spool {
			Spool::Memory(buffer) => {
				buffer.extend_from_slice(buf);
				Ok(buf.len())
			}
			Spool::File { file, len } => {
				let written = file.write(buf)?;
				*len += written as u64;
				Ok(written)
			}
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		match &mut self.spool {
			Spool::Memory(_) => Ok(()),
			Spool::File { file, .. } => file.flush(),
		}
	}
}
