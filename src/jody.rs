//! `JodyHash` — streaming combiner over 64-bit digests.
//!
//! One `u64` of state. Each digest `x` is folded in as
//!
//! ```text
//! s = rotl₁₄(rotl₁₄(s + x + K) ⊕ x) ⊕ K + x
//! ```
//!
//! with `K = 0x1F3D5B79` and wrapping arithmetic. The double rotation
//! spreads a single flipped input bit across most of the state. The fold is
//! order-sensitive: `[a, b]` and `[b, a]` generally differ.
//!
//! # Lifecycle
//!
//! `new` → any number of `absorb` → `finalize`. [`finalize`](JodyHasher::finalize)
//! reads without consuming, so absorbing after it is possible, but the
//! result of doing so is not part of the contract: nothing guarantees it
//! matches any other sequence.

use std::hash::{BuildHasher, Hasher};

/// Mixing constant, widened from 32 bits.
pub const JODY_CONSTANT: u64 = 0x1F3D_5B79;

/// Rotation applied twice per absorbed digest.
const ROTATION: u32 = 14;

/// One step of the fold.
#[inline]
#[must_use]
pub const fn jody_step(state: u64, digest: u64) -> u64 {
    let mut s = state.wrapping_add(digest).wrapping_add(JODY_CONSTANT);
    s = s.rotate_left(ROTATION);
    s ^= digest;
    s = s.rotate_left(ROTATION);
    s ^= JODY_CONSTANT;
    s.wrapping_add(digest)
}

/// Streaming combiner state.
///
/// Owned by a single fingerprinting pass; two passes need two instances.
/// `Copy` so a pass can fork a prefix and continue two ways.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct JodyHasher {
    state: u64,
}

impl JodyHasher {
    /// Creates a fresh combiner with zero state.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    /// Resumes from a raw state word, e.g. one read back from a caller buffer.
    #[must_use]
    pub const fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Returns the raw state word.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Folds one digest into the state.
    #[inline]
    pub const fn absorb(&mut self, digest: u64) {
        self.state = jody_step(self.state, digest);
    }

    /// Builder-style [`absorb`](Self::absorb).
    #[inline]
    #[must_use]
    pub const fn with(mut self, digest: u64) -> Self {
        self.absorb(digest);
        self
    }

    /// Returns the combined digest. The state is left untouched.
    #[must_use]
    pub const fn finalize(&self) -> u64 {
        self.state
    }
}

/// Combines a sequence of digests in one call.
#[must_use]
pub fn combine<I: IntoIterator<Item = u64>>(digests: I) -> u64 {
    digests.into_iter().collect::<JodyHasher>().finalize()
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl Extend<u64> for JodyHasher {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for digest in iter {
            self.absorb(digest);
        }
    }
}

impl FromIterator<u64> for JodyHasher {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut hasher = Self::new();
        hasher.extend(iter);
        hasher
    }
}

/// `Hasher` adapter: one `write_u64` is one absorbed digest.
///
/// Byte input is absorbed in little-endian 8-byte words, with the tail
/// zero-padded. Byte writes are not length-delimited: `write(&[1])` and
/// `write(&[1, 0])` absorb the same word. Types that need a boundary, like
/// `str`, write their own terminator.
///
/// Narrower `write_*` calls go through [`write`](Hasher::write) and are
/// therefore not type-tagged; feed typed digests through `write_u64` when
/// type identity matters.
impl Hasher for JodyHasher {
    fn finish(&self) -> u64 {
        self.finalize()
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let mut word = [0_u8; 8];
            word.copy_from_slice(chunk);
            self.absorb(u64::from_le_bytes(word));
        }
        let tail = chunks.remainder();
        if !tail.is_empty() {
            let mut word = [0_u8; 8];
            word[..tail.len()].copy_from_slice(tail);
            self.absorb(u64::from_le_bytes(word));
        }
    }

    fn write_u64(&mut self, digest: u64) {
        self.absorb(digest);
    }
}

/// [`BuildHasher`] producing fresh [`JodyHasher`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildJodyHasher;

impl BuildHasher for BuildJodyHasher {
    type Hasher = JodyHasher;

    fn build_hasher(&self) -> JodyHasher {
        JodyHasher::new()
    }
}
