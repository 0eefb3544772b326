//! Type-alias layer: C scalar types routed to fixed-width entry points.
//!
//! Each `hash_<cname>` takes the matching [`core::ffi`] alias and forwards
//! through [`ScalarHash`], so the alias → kind mapping is decided by the
//! compiler for the build target. `c_char` is `i8` or `u8` depending on
//! the target ABI, and `hash_char` follows it automatically.

use core::ffi::{
    c_char, c_double, c_float, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint,
    c_ulong, c_ulonglong, c_ushort,
};
use std::fmt;

use crate::scalar::{HashKind, ScalarHash, ScalarKind};

macro_rules! ctype_table {
    ($($variant:ident, $fn_name:ident, $ty:ty, $cname:literal;)*) => {
        /// C scalar types with a hash entry point.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum CType {
            $(
                #[doc = concat!("`", $cname, "`")]
                $variant,
            )*
        }

        impl CType {
            /// Every C type in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The C spelling of the type.
            #[must_use]
            pub const fn c_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $cname,)*
                }
            }

            /// The entry point the type resolves to on this target.
            #[must_use]
            pub const fn kind(self) -> HashKind {
                match self {
                    $(Self::$variant => <$ty as ScalarHash>::KIND,)*
                }
            }

            /// Storage size in bytes on this target.
            #[must_use]
            pub const fn size(self) -> usize {
                match self {
                    $(Self::$variant => size_of::<$ty>(),)*
                }
            }
        }

        $(
            #[doc = concat!("Hashes a C `", $cname, "`.")]
            #[inline]
            #[must_use]
            pub fn $fn_name(value: $ty) -> u64 {
                value.scalar_hash()
            }

            const _: () = assert!(
                size_of::<$ty>() * 8 == <$ty as ScalarHash>::KIND.bits() as usize,
                concat!("`", $cname, "` does not match the width of its entry point"),
            );
        )*
    };
}

ctype_table! {
    Char, hash_char, c_char, "char";
    SChar, hash_schar, c_schar, "signed char";
    UChar, hash_uchar, c_uchar, "unsigned char";
    Short, hash_short, c_short, "short";
    UShort, hash_ushort, c_ushort, "unsigned short";
    Int, hash_int, c_int, "int";
    UInt, hash_uint, c_uint, "unsigned int";
    Long, hash_long, c_long, "long";
    ULong, hash_ulong, c_ulong, "unsigned long";
    LLong, hash_llong, c_longlong, "long long";
    ULLong, hash_ullong, c_ulonglong, "unsigned long long";
    IntPtr, hash_intptr, isize, "intptr_t";
    UIntPtr, hash_uintptr, usize, "uintptr_t";
    Bool, hash_bool, bool, "_Bool";
    Float, hash_float, c_float, "float";
    Double, hash_double, c_double, "double";
}

// Integer aliases must also agree on signedness with their entry point.
macro_rules! assert_signedness {
    ($($ty:ty),*) => {
        $(
            const _: () = assert!(
                matches!(
                    <$ty as ScalarHash>::KIND,
                    HashKind::Int(kind) if kind.is_signed() == (<$ty>::MIN != 0)
                ),
                "integer alias resolved to an entry point of the wrong signedness",
            );
        )*
    };
}

assert_signedness!(
    c_char, c_schar, c_uchar, c_short, c_ushort, c_int, c_uint, c_long, c_ulong, c_longlong,
    c_ulonglong, isize, usize
);

/// The integer kind a C alias resolves to on this target, or `None` for
/// `float`/`double`.
#[must_use]
pub const fn ctype_kind<T: ScalarHash>() -> Option<ScalarKind> {
    match T::KIND {
        HashKind::Int(kind) => Some(kind),
        HashKind::Float(_) => None,
    }
}

impl CType {
    /// The integer kind this type resolves to, or `None` for `float`/`double`.
    #[must_use]
    pub const fn scalar_kind(self) -> Option<ScalarKind> {
        match self.kind() {
            HashKind::Int(kind) => Some(kind),
            HashKind::Float(_) => None,
        }
    }

    /// Returns `true` if plain `char` is signed on this target.
    #[must_use]
    pub const fn char_is_signed() -> bool {
        c_char::MIN != 0
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}
