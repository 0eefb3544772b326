//! Combiner state stored in caller-provided bytes.
//!
//! Lets a caller embed the combiner inline in its own frame or struct.
//! The state occupies the first [`STATE_SIZE`] bytes, native-endian; any
//! trailing bytes are left alone.

use thiserror::Error;

use crate::jody::JodyHasher;

/// Bytes of storage one combiner state needs.
pub const STATE_SIZE: usize = size_of::<u64>();

/// Errors from the slice-based buffer API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The buffer cannot hold a combiner state.
    #[error("combiner buffer too small: {len} bytes, need {required}")]
    TooSmall {
        /// Length of the buffer provided.
        len: usize,
        /// Bytes required ([`STATE_SIZE`]).
        required: usize,
    },
}

/// Bytes of storage one combiner state needs.
#[must_use]
pub const fn combiner_state_size() -> usize {
    STATE_SIZE
}

// ---------------------------------------------------------------------------
// Fixed-size storage — total
// ---------------------------------------------------------------------------

/// Writes a fresh state into `buf`.
pub const fn init(buf: &mut [u8; STATE_SIZE]) {
    store(buf, JodyHasher::new());
}

/// Folds `digest` into the state held in `buf`.
pub const fn update(buf: &mut [u8; STATE_SIZE], digest: u64) {
    store(buf, load(buf).with(digest));
}

/// Reads the combined digest from `buf`.
#[must_use]
pub const fn finish(buf: &[u8; STATE_SIZE]) -> u64 {
    load(buf).finalize()
}

/// Decodes the state held in `buf`.
#[must_use]
pub const fn load(buf: &[u8; STATE_SIZE]) -> JodyHasher {
    JodyHasher::from_state(u64::from_ne_bytes(*buf))
}

/// Encodes `hasher` into `buf`.
pub const fn store(buf: &mut [u8; STATE_SIZE], hasher: JodyHasher) {
    *buf = hasher.state().to_ne_bytes();
}

// ---------------------------------------------------------------------------
// Slice storage — checked
// ---------------------------------------------------------------------------

const fn head(buf: &[u8]) -> Result<&[u8; STATE_SIZE], BufferError> {
    match buf.first_chunk() {
        Some(chunk) => Ok(chunk),
        None => Err(too_small(buf.len())),
    }
}

const fn head_mut(buf: &mut [u8]) -> Result<&mut [u8; STATE_SIZE], BufferError> {
    let len = buf.len();
    match buf.first_chunk_mut() {
        Some(chunk) => Ok(chunk),
        None => Err(too_small(len)),
    }
}

const fn too_small(len: usize) -> BufferError {
    BufferError::TooSmall {
        len,
        required: STATE_SIZE,
    }
}

/// Writes a fresh state into the head of `buf`.
///
/// # Errors
///
/// [`BufferError::TooSmall`] if `buf` is shorter than [`STATE_SIZE`].
pub fn combiner_init(buf: &mut [u8]) -> Result<(), BufferError> {
    init(head_mut(buf)?);
    Ok(())
}

/// Folds `digest` into the state at the head of `buf`.
///
/// # Errors
///
/// [`BufferError::TooSmall`] if `buf` is shorter than [`STATE_SIZE`].
pub fn combiner_update(buf: &mut [u8], digest: u64) -> Result<(), BufferError> {
    update(head_mut(buf)?, digest);
    Ok(())
}

/// Reads the combined digest from the head of `buf`.
///
/// # Errors
///
/// [`BufferError::TooSmall`] if `buf` is shorter than [`STATE_SIZE`].
pub fn combiner_finish(buf: &[u8]) -> Result<u64, BufferError> {
    head(buf).map(finish)
}
