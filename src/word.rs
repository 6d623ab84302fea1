//! `Word` is the integer type at the core of [`Limb`][`crate::Limb`].
//!
//! The kernel's data model fixes limbs at 64 bits on every platform: limb
//! vectors are interchanged with callers as `u64` arrays, so unlike a
//! general big integer library there is no pointer-width specialization.

/// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
pub type Word = u64;

/// Wide integer type: double the width of [`Word`].
pub type WideWord = u128;
