//! Scalar hash table — one entry point per fixed-width kind.
//!
//! Every integer kind computes `digest = C(kind) ⊕ zext₆₄(bits(value))`,
//! where `C(kind)` is a per-kind type constant. The constant is what keeps
//! `0_u8`, `0_u32` and `0_i64` apart: the raw bits are identical, the digests
//! are not.
//!
//! Floats are hashed by bit pattern under their own constants, so `+0.0` and
//! `-0.0` hash differently and NaN payloads are not canonicalized.

use std::fmt;

// ---------------------------------------------------------------------------
// Type constants
// ---------------------------------------------------------------------------

const U8_CONSTANT: u64 = 0x0000_0000_0000_0000;
const U16_CONSTANT: u64 = 0x5A5A_5A5A_5A5A_5A5A;
const U32_CONSTANT: u64 = 0xB4B4_B4B4_B4B4_B4B4;
const U64_CONSTANT: u64 = 0x0F0F_0F0F_0F0F_0F0E;
const I8_CONSTANT: u64 = 0xC3C3_C3C3_C3C3_C3C2;
const I16_CONSTANT: u64 = 0x1E1E_1E1E_1E1E_1E1C;
const I32_CONSTANT: u64 = 0x7878_7878_7878_7876;
const I64_CONSTANT: u64 = 0xD2D2_D2D2_D2D2_D2D0;

const F32_CONSTANT: u64 = 0x3C3C_3C3C_3C3C_3C38;
const F64_CONSTANT: u64 = 0x9696_9696_9696_9692;

// Floats are reinterpreted as same-width unsigned integers.
const _: () = assert!(size_of::<f32>() == 4, "unsupported format: f32 must be 4 bytes");
const _: () = assert!(size_of::<f64>() == 8, "unsupported format: f64 must be 8 bytes");

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// Signedness half of a [`ScalarKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Unsigned integer.
    Unsigned,
    /// Two's-complement signed integer.
    Signed,
}

/// Bit-width half of a [`ScalarKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    /// 8 bits.
    W8,
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
}

impl Width {
    /// Number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Width with exactly `bits` bits, if supported.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}

/// A `(signedness, width)` pair selecting one integer hash entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScalarKind {
    /// Signed or unsigned.
    pub signedness: Signedness,
    /// Storage width.
    pub width: Width,
}

impl ScalarKind {
    /// `u8`.
    pub const U8: Self = Self::new(Signedness::Unsigned, Width::W8);
    /// `u16`.
    pub const U16: Self = Self::new(Signedness::Unsigned, Width::W16);
    /// `u32`.
    pub const U32: Self = Self::new(Signedness::Unsigned, Width::W32);
    /// `u64`.
    pub const U64: Self = Self::new(Signedness::Unsigned, Width::W64);
    /// `i8`.
    pub const I8: Self = Self::new(Signedness::Signed, Width::W8);
    /// `i16`.
    pub const I16: Self = Self::new(Signedness::Signed, Width::W16);
    /// `i32`.
    pub const I32: Self = Self::new(Signedness::Signed, Width::W32);
    /// `i64`.
    pub const I64: Self = Self::new(Signedness::Signed, Width::W64);

    /// Every supported integer kind, unsigned first, narrowest first.
    pub const ALL: [Self; 8] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
    ];

    /// Creates a kind from its two halves.
    #[must_use]
    pub const fn new(signedness: Signedness, width: Width) -> Self {
        Self { signedness, width }
    }

    /// Resolves a kind from a signedness and a bit count.
    ///
    /// Returns `None` for widths outside `{8, 16, 32, 64}`.
    #[must_use]
    pub const fn from_bits(signedness: Signedness, bits: u32) -> Option<Self> {
        match Width::from_bits(bits) {
            Some(width) => Some(Self::new(signedness, width)),
            None => None,
        }
    }

    /// Returns `true` for signed kinds.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self.signedness, Signedness::Signed)
    }

    /// Number of bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.width.bits()
    }

    /// The type identity constant XORed into every digest of this kind.
    #[must_use]
    pub const fn type_constant(self) -> u64 {
        match (self.signedness, self.width) {
            (Signedness::Unsigned, Width::W8) => U8_CONSTANT,
            (Signedness::Unsigned, Width::W16) => U16_CONSTANT,
            (Signedness::Unsigned, Width::W32) => U32_CONSTANT,
            (Signedness::Unsigned, Width::W64) => U64_CONSTANT,
            (Signedness::Signed, Width::W8) => I8_CONSTANT,
            (Signedness::Signed, Width::W16) => I16_CONSTANT,
            (Signedness::Signed, Width::W32) => I32_CONSTANT,
            (Signedness::Signed, Width::W64) => I64_CONSTANT,
        }
    }

    /// Hashes a raw bit pattern as this kind.
    ///
    /// Bits above [`bits`](Self::bits) are discarded first, so this agrees
    /// with the typed entry points for any input.
    #[must_use]
    pub const fn hash_bits(self, bits: u64) -> u64 {
        let mask = match self.width {
            Width::W64 => u64::MAX,
            width => (1 << width.bits()) - 1,
        };
        self.type_constant() ^ (bits & mask)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_signed() { 'i' } else { 'u' };
        write!(f, "{prefix}{}", self.bits())
    }
}

/// IEEE 754 formats with a dedicated hash constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatFormat {
    /// `f32`.
    Binary32,
    /// `f64`.
    Binary64,
}

impl FloatFormat {
    /// The type identity constant XORed into every digest of this format.
    #[must_use]
    pub const fn type_constant(self) -> u64 {
        match self {
            Self::Binary32 => F32_CONSTANT,
            Self::Binary64 => F64_CONSTANT,
        }
    }
}

/// What a [`ScalarHash`] type hashes as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Fixed-width integer entry point.
    Int(ScalarKind),
    /// Floating-point entry point.
    Float(FloatFormat),
}

impl HashKind {
    /// Storage size in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Int(kind) => kind.bits(),
            Self::Float(FloatFormat::Binary32) => 32,
            Self::Float(FloatFormat::Binary64) => 64,
        }
    }

    /// The type identity constant of this entry point.
    #[must_use]
    pub const fn type_constant(self) -> u64 {
        match self {
            Self::Int(kind) => kind.type_constant(),
            Self::Float(format) => format.type_constant(),
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed-width entry points
// ---------------------------------------------------------------------------

/// Hashes a `u8`.
#[inline]
#[must_use]
pub const fn hash_u8(value: u8) -> u64 {
    U8_CONSTANT ^ value as u64
}

/// Hashes a `u16`.
#[inline]
#[must_use]
pub const fn hash_u16(value: u16) -> u64 {
    U16_CONSTANT ^ value as u64
}

/// Hashes a `u32`.
#[inline]
#[must_use]
pub const fn hash_u32(value: u32) -> u64 {
    U32_CONSTANT ^ value as u64
}

/// Hashes a `u64`.
#[inline]
#[must_use]
pub const fn hash_u64(value: u64) -> u64 {
    U64_CONSTANT ^ value
}

/// Hashes an `i8`. The bit pattern is zero-extended, not sign-extended.
#[inline]
#[must_use]
pub const fn hash_i8(value: i8) -> u64 {
    I8_CONSTANT ^ value.cast_unsigned() as u64
}

/// Hashes an `i16`. The bit pattern is zero-extended, not sign-extended.
#[inline]
#[must_use]
pub const fn hash_i16(value: i16) -> u64 {
    I16_CONSTANT ^ value.cast_unsigned() as u64
}

/// Hashes an `i32`. The bit pattern is zero-extended, not sign-extended.
#[inline]
#[must_use]
pub const fn hash_i32(value: i32) -> u64 {
    I32_CONSTANT ^ value.cast_unsigned() as u64
}

/// Hashes an `i64`.
#[inline]
#[must_use]
pub const fn hash_i64(value: i64) -> u64 {
    I64_CONSTANT ^ value.cast_unsigned()
}

/// Hashes an `f32` by its bit pattern.
#[inline]
#[must_use]
pub const fn hash_f32(value: f32) -> u64 {
    F32_CONSTANT ^ value.to_bits() as u64
}

/// Hashes an `f64` by its bit pattern.
#[inline]
#[must_use]
pub const fn hash_f64(value: f64) -> u64 {
    F64_CONSTANT ^ value.to_bits()
}

// ---------------------------------------------------------------------------
// Compile-time dispatch
// ---------------------------------------------------------------------------

mod sealed {
    pub trait Sealed {}
}

/// A primitive with a hash entry point.
///
/// Resolution happens at compile time: a type alias such as
/// [`core::ffi::c_long`] picks up whichever impl matches its definition on
/// the build target, and a type with no impl fails to compile.
///
/// Sealed; the set of entry points is fixed.
pub trait ScalarHash: Copy + sealed::Sealed {
    /// The entry point this type routes to.
    const KIND: HashKind;

    /// Computes the digest.
    fn scalar_hash(self) -> u64;
}

macro_rules! impl_scalar_hash {
    ($($ty:ty => $kind:expr, $entry:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ScalarHash for $ty {
                const KIND: HashKind = $kind;

                #[inline]
                fn scalar_hash(self) -> u64 {
                    $entry(self)
                }
            }
        )*
    };
}

impl_scalar_hash! {
    u8 => HashKind::Int(ScalarKind::U8), hash_u8;
    u16 => HashKind::Int(ScalarKind::U16), hash_u16;
    u32 => HashKind::Int(ScalarKind::U32), hash_u32;
    u64 => HashKind::Int(ScalarKind::U64), hash_u64;
    i8 => HashKind::Int(ScalarKind::I8), hash_i8;
    i16 => HashKind::Int(ScalarKind::I16), hash_i16;
    i32 => HashKind::Int(ScalarKind::I32), hash_i32;
    i64 => HashKind::Int(ScalarKind::I64), hash_i64;
    f32 => HashKind::Float(FloatFormat::Binary32), hash_f32;
    f64 => HashKind::Float(FloatFormat::Binary64), hash_f64;
}

impl sealed::Sealed for bool {}

/// `bool` hashes as the `u8` values `0` and `1`.
impl ScalarHash for bool {
    const KIND: HashKind = HashKind::Int(ScalarKind::U8);

    #[inline]
    fn scalar_hash(self) -> u64 {
        hash_u8(u8::from(self))
    }
}

macro_rules! impl_pointer_width {
    ($uty:ty, $ity:ty, $ukind:ident, $ikind:ident) => {
        impl sealed::Sealed for usize {}

        impl ScalarHash for usize {
            const KIND: HashKind = HashKind::Int(ScalarKind::$ukind);

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn scalar_hash(self) -> u64 {
                (self as $uty).scalar_hash()
            }
        }

        impl sealed::Sealed for isize {}

        impl ScalarHash for isize {
            const KIND: HashKind = HashKind::Int(ScalarKind::$ikind);

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn scalar_hash(self) -> u64 {
                (self as $ity).scalar_hash()
            }
        }
    };
}

#[cfg(target_pointer_width = "16")]
impl_pointer_width!(u16, i16, U16, I16);
#[cfg(target_pointer_width = "32")]
impl_pointer_width!(u32, i32, U32, I32);
#[cfg(target_pointer_width = "64")]
impl_pointer_width!(u64, i64, U64, I64);

#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("unsupported pointer width: no matching scalar kind");

const _: () = assert!(size_of::<usize>() * 8 == <usize as ScalarHash>::KIND.bits() as usize);

/// Hashes any [`ScalarHash`] value through its compile-time entry point.
#[inline]
#[must_use]
pub fn hash_value<T: ScalarHash>(value: T) -> u64 {
    value.scalar_hash()
}

/// The entry point `T` routes to.
#[must_use]
pub const fn kind_of<T: ScalarHash>() -> HashKind {
    T::KIND
}
