//! Big unsigned integers.

mod add;
pub(crate) mod bits;
pub(crate) mod cmp;
pub(crate) mod sub;

#[cfg(feature = "rand")]
mod rand;

use crate::{Limb, Word};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Big unsigned integer.
///
/// Generic over the given number of `LIMBS`, stored from least significant
/// to most significant. This is the fixed-width operand type of the
/// Montgomery exponentiation engine: all inputs and outputs of a given
/// modulus share one `LIMBS` value.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct Uint<const LIMBS: usize> {
    /// Inner limb array. Stored from least significant to most significant.
    pub(crate) limbs: [Limb; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self::from_u64(0);

    /// The value `1`.
    pub const ONE: Self = Self::from_u64(1);

    /// Maximum value this [`Uint`] can express.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX; LIMBS],
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = LIMBS as u32 * Limb::BITS;

    /// The number of limbs used in this representation.
    pub const LIMBS: usize = LIMBS;

    /// Const-friendly [`Uint`] constructor.
    pub const fn new(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Create a [`Uint`] from a `u64` (const-friendly).
    pub const fn from_u64(n: u64) -> Self {
        assert!(LIMBS >= 1, "number of limbs must be nonzero");
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0] = Limb(n);
        Self { limbs }
    }

    /// Create a [`Uint`] from an array of [`Word`]s (i.e. word-sized
    /// unsigned integers), least significant first.
    #[inline]
    pub const fn from_words(arr: [Word; LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(arr[i]);
            i += 1;
        }

        Self { limbs }
    }

    /// Create an array of [`Word`]s from a [`Uint`], least significant
    /// first.
    #[inline]
    pub const fn to_words(self) -> [Word; LIMBS] {
        let mut arr = [0; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            arr[i] = self.limbs[i].0;
            i += 1;
        }

        arr
    }

    /// Borrow the limbs of this [`Uint`].
    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Borrow the limbs of this [`Uint`] mutably.
    pub const fn as_limbs_mut(&mut self) -> &mut [Limb; LIMBS] {
        &mut self.limbs
    }

    /// Convert this [`Uint`] into its inner limbs.
    pub const fn to_limbs(self) -> [Limb; LIMBS] {
        self.limbs
    }
}

impl<const LIMBS: usize> AsRef<[Limb]> for Uint<LIMBS> {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl<const LIMBS: usize> AsMut<[Limb]> for Uint<LIMBS> {
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_limbs_mut()
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Uint<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for i in 0..LIMBS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Uint<LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0;

        for i in 0..LIMBS {
            acc |= self.limbs[i].0 ^ other.limbs[i].0;
        }

        // `acc == 0` if and only if `self == other`
        Limb(acc).is_zero()
    }
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> From<u64> for Uint<LIMBS> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<const LIMBS: usize> fmt::Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> zeroize::DefaultIsZeroes for Uint<LIMBS> {}

/// 256-bit unsigned big integer (4 limbs).
pub type U256 = Uint<4>;

/// 512-bit unsigned big integer (8 limbs).
pub type U512 = Uint<8>;

/// 1024-bit unsigned big integer (16 limbs).
pub type U1024 = Uint<16>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{U256, Uint};
    use std::format;

    #[test]
    fn from_u64_sets_low_limb() {
        let n = U256::from_u64(42);
        assert_eq!(n.as_limbs()[0].0, 42);
        assert!(n.as_limbs()[1..].iter().all(|l| l.0 == 0));
    }

    #[test]
    fn words_roundtrip() {
        let words = [1, 2, 3, 4];
        assert_eq!(U256::from_words(words).to_words(), words);
    }

    #[test]
    fn display() {
        let n = Uint::<2>::from_words([0xdead_beef, 1]);
        assert_eq!(format!("{n}"), "000000000000000100000000DEADBEEF");
    }
}
