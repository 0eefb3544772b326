//! C ABI exports for instrumented code.
//!
//! Symbol names match the runtime the instrumentation pass already emits
//! calls to, so this crate built as a `staticlib` links in as a drop-in.
//!
//! Everything here forwards to the safe API. The only unsafe operation is
//! turning the caller's combiner buffer pointer into a reference.

use core::ffi::{
    c_char, c_double, c_float, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint,
    c_ulong, c_ulonglong, c_ushort, c_void,
};

use crate::buffer::{self, STATE_SIZE};
use crate::{ctype, pointer, scalar};

macro_rules! export_hash {
    ($($symbol:ident($ty:ty) => $target:path;)*) => {
        $(
            #[doc = concat!("C entry point for [`", stringify!($target), "`].")]
            #[unsafe(no_mangle)]
            #[must_use]
            pub extern "C" fn $symbol(x: $ty) -> u64 {
                $target(x)
            }
        )*
    };
}

export_hash! {
    __c2rust_hash_u8(u8) => scalar::hash_u8;
    __c2rust_hash_u16(u16) => scalar::hash_u16;
    __c2rust_hash_u32(u32) => scalar::hash_u32;
    __c2rust_hash_u64(u64) => scalar::hash_u64;
    __c2rust_hash_i8(i8) => scalar::hash_i8;
    __c2rust_hash_i16(i16) => scalar::hash_i16;
    __c2rust_hash_i32(i32) => scalar::hash_i32;
    __c2rust_hash_i64(i64) => scalar::hash_i64;

    __c2rust_hash_char(c_char) => ctype::hash_char;
    __c2rust_hash_schar(c_schar) => ctype::hash_schar;
    __c2rust_hash_uchar(c_uchar) => ctype::hash_uchar;
    __c2rust_hash_short(c_short) => ctype::hash_short;
    __c2rust_hash_ushort(c_ushort) => ctype::hash_ushort;
    __c2rust_hash_int(c_int) => ctype::hash_int;
    __c2rust_hash_uint(c_uint) => ctype::hash_uint;
    __c2rust_hash_long(c_long) => ctype::hash_long;
    __c2rust_hash_ulong(c_ulong) => ctype::hash_ulong;
    __c2rust_hash_llong(c_longlong) => ctype::hash_llong;
    __c2rust_hash_ullong(c_ulonglong) => ctype::hash_ullong;
    __c2rust_hash_intptr(isize) => ctype::hash_intptr;
    __c2rust_hash_uintptr(usize) => ctype::hash_uintptr;
    __c2rust_hash_bool(bool) => ctype::hash_bool;
    __c2rust_hash_float(c_float) => ctype::hash_float;
    __c2rust_hash_double(c_double) => ctype::hash_double;
}

// ---------------------------------------------------------------------------
// Pointers
// ---------------------------------------------------------------------------

/// C entry point for [`pointer::pointer_is_valid`].
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn __c2rust_pointer_is_valid(p: *const c_void) -> bool {
    pointer::pointer_is_valid(p)
}

/// C entry point for [`pointer::hash_invalid_pointer`].
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn __c2rust_hash_invalid_pointer(p: *const c_void) -> u64 {
    pointer::hash_invalid_pointer(p)
}

/// C entry point for [`pointer::hash_void_ptr`].
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn __c2rust_hash_void_ptr(p: *const c_void) -> u64 {
    pointer::hash_void_ptr(p)
}

/// C entry point for [`pointer::hash_function`].
#[unsafe(no_mangle)]
#[must_use]
pub extern "C" fn __c2rust_hash_function(f: *const c_void) -> u64 {
    pointer::hash_function(f)
}

// ---------------------------------------------------------------------------
// JodyHash combiner
// ---------------------------------------------------------------------------

/// Size in bytes of the buffer the `__c2rust_hasher_jodyhash_*` functions expect.
#[unsafe(no_mangle)]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub extern "C" fn __c2rust_hasher_jodyhash_size() -> c_uint {
    STATE_SIZE as c_uint
}

/// Reborrows a caller buffer as combiner storage. `None` for null.
///
/// # Safety
///
/// A non-null `p` must be valid for reads and writes of [`STATE_SIZE`]
/// bytes and not aliased for the returned lifetime.
unsafe fn state_buf<'a>(p: *mut c_char, caller: &str) -> Option<&'a mut [u8; STATE_SIZE]> {
    if p.is_null() {
        log::error!("{caller}: null combiner buffer, ignoring call");
        return None;
    }
    // SAFETY: non-null and sized per the caller contract; `[u8; N]` has
    // alignment 1.
    Some(unsafe { &mut *p.cast::<[u8; STATE_SIZE]>() })
}

/// Initializes the combiner state in `p`.
///
/// # Safety
///
/// `p` must be null or point to at least [`STATE_SIZE`] writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __c2rust_hasher_jodyhash_init(p: *mut c_char) {
    // SAFETY: forwarded caller contract.
    if let Some(buf) = unsafe { state_buf(p, "__c2rust_hasher_jodyhash_init") } {
        buffer::init(buf);
    }
}

/// Folds digest `x` into the combiner state in `p`.
///
/// # Safety
///
/// `p` must be null or point to at least [`STATE_SIZE`] readable and
/// writable bytes previously initialized by [`__c2rust_hasher_jodyhash_init`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __c2rust_hasher_jodyhash_update(p: *mut c_char, x: u64) {
    // SAFETY: forwarded caller contract.
    if let Some(buf) = unsafe { state_buf(p, "__c2rust_hasher_jodyhash_update") } {
        buffer::update(buf, x);
    }
}

/// Reads the combined digest from `p`. Returns `0` for a null buffer.
///
/// # Safety
///
/// `p` must be null or point to at least [`STATE_SIZE`] readable bytes
/// previously initialized by [`__c2rust_hasher_jodyhash_init`].
#[unsafe(no_mangle)]
#[must_use]
pub unsafe extern "C" fn __c2rust_hasher_jodyhash_finish(p: *mut c_char) -> u64 {
    // SAFETY: forwarded caller contract.
    let buf = unsafe { state_buf(p, "__c2rust_hasher_jodyhash_finish") };
    buf.map_or(0, |buf| buffer::finish(buf))
}
