//! Pointer hash policy.
//!
//! Pointers are never dereferenced and never hashed by address. A pointer
//! contributes one of three sentinels, recording only *that* a pointer of a
//! given class was present.

/// Digest of a null or otherwise invalid pointer.
pub const NULL_POINTER_HASH: u64 = 0;

/// Digest of any valid opaque pointer: `"VoidStar"` as little-endian ASCII.
pub const VOID_POINTER_HASH: u64 = 0x7261_7453_6469_6F56;

/// Digest of any function pointer: `"FuncStar"` as little-endian ASCII.
pub const FUNCTION_POINTER_HASH: u64 = 0x7261_7453_636E_7546;

/// Digest for callers that stop descending at leaf pointers.
///
/// Not produced by any function in this crate.
pub const LEAF_POINTER_HASH: u64 = 0xDEAD_BEEF;

const _: () = assert!(VOID_POINTER_HASH == u64::from_le_bytes(*b"VoidStar"));
const _: () = assert!(FUNCTION_POINTER_HASH == u64::from_le_bytes(*b"FuncStar"));

/// Pointer equivalence classes, each hashed to a single sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerClass {
    /// Null.
    Invalid,
    /// Non-null, pointee treated as opaque.
    VoidStar,
    /// Non-null function pointer.
    FuncStar,
}

impl PointerClass {
    /// The sentinel digest of this class.
    #[must_use]
    pub const fn sentinel(self) -> u64 {
        match self {
            Self::Invalid => NULL_POINTER_HASH,
            Self::VoidStar => VOID_POINTER_HASH,
            Self::FuncStar => FUNCTION_POINTER_HASH,
        }
    }

    /// Classifies a data pointer.
    #[must_use]
    pub const fn of<T: ?Sized>(ptr: *const T) -> Self {
        if pointer_is_valid(ptr) {
            Self::VoidStar
        } else {
            Self::Invalid
        }
    }

    /// Classifies an optional function pointer.
    ///
    /// `F` is expected to be a `fn` type; Rust `fn` values are never null,
    /// so absence is expressed through `Option`.
    #[must_use]
    pub const fn of_fn<F: Copy>(f: Option<F>) -> Self {
        match f {
            Some(_) => Self::FuncStar,
            None => Self::Invalid,
        }
    }
}

/// Returns `true` iff `ptr` is non-null.
#[inline]
#[must_use]
pub const fn pointer_is_valid<T: ?Sized>(ptr: *const T) -> bool {
    !ptr.is_null()
}

/// Digest of an invalid pointer. Ignores its argument.
///
/// Intended for pointers already rejected by [`pointer_is_valid`].
#[inline]
#[must_use]
pub const fn hash_invalid_pointer<T: ?Sized>(_ptr: *const T) -> u64 {
    NULL_POINTER_HASH
}

/// Digest of an opaque pointer: [`NULL_POINTER_HASH`] if null, otherwise
/// [`VOID_POINTER_HASH`] regardless of address.
#[inline]
#[must_use]
pub const fn hash_void_ptr<T: ?Sized>(ptr: *const T) -> u64 {
    PointerClass::of(ptr).sentinel()
}

/// Digest of a function pointer: always [`FUNCTION_POINTER_HASH`].
///
/// Distinct functions are not told apart. Null is not special-cased either;
/// callers check [`pointer_is_valid`] first.
#[inline]
#[must_use]
pub const fn hash_function<T: ?Sized>(_ptr: *const T) -> u64 {
    FUNCTION_POINTER_HASH
}

/// Digest of an optional `fn` value, using the same sentinels as the raw
/// pointer entry points.
#[inline]
#[must_use]
pub const fn hash_fn_option<F: Copy>(f: Option<F>) -> u64 {
    PointerClass::of_fn(f).sentinel()
}
