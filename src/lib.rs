//! Deterministic, type-aware value fingerprinting.
//!
//! Instrumented code hashes each scalar it meets with the entry point for
//! that scalar's exact type, then folds the digests of a larger structure
//! (an argument list, a struct's fields) into one fingerprint with the
//! streaming combiner.
//!
//! # Key properties
//!
//! - **Type-tagged digests**: `hash_u32(0) != hash_u64(0)`; every kind XORs
//!   its own type constant into the value bits
//! - **Compile-time routing**: C type aliases resolve to fixed-width entry
//!   points per target through [`ScalarHash`]; unsupported widths fail the build
//! - **Pointer sentinels**: pointers hash by class (null, opaque, function),
//!   never by address or pointee
//! - **Order-sensitive combiner**: [`JodyHasher`] folds digests with a
//!   double-rotation mix
//! - **Total**: no hash operation fails, blocks or allocates
//!
//! Not cryptographic. Floats hash by bit pattern, so `-0.0 != +0.0` and
//! NaN payloads are significant.
//!
//! # Features
//!
//! - `ffi` — exports the `__c2rust_*` C symbols (see [`ffi`]).

#![cfg_attr(not(feature = "ffi"), forbid(unsafe_code))]
#![cfg_attr(feature = "ffi", deny(unsafe_code))]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod ctype;
pub mod jody;
pub mod pointer;
pub mod scalar;

#[cfg(feature = "ffi")]
#[allow(unsafe_code)]
pub mod ffi;

#[cfg(test)]
mod tests;

pub use buffer::{BufferError, STATE_SIZE, combiner_state_size};
pub use ctype::{CType, ctype_kind};
pub use jody::{BuildJodyHasher, JODY_CONSTANT, JodyHasher, combine};
pub use pointer::{
    FUNCTION_POINTER_HASH, NULL_POINTER_HASH, PointerClass, VOID_POINTER_HASH, hash_function,
    hash_invalid_pointer, hash_void_ptr, pointer_is_valid,
};
pub use scalar::{
    FloatFormat, HashKind, ScalarHash, ScalarKind, Signedness, Width, hash_f32, hash_f64, hash_i8,
    hash_i16, hash_i32, hash_i64, hash_u8, hash_u16, hash_u32, hash_u64, hash_value, kind_of,
};
