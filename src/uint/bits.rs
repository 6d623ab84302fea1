//! [`Uint`] bit counting and access.

use super::Uint;
use crate::Limb;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Calculate the number of bits needed to represent this number, i.e.
    /// the 1-based position of its highest set bit, in variable time with
    /// respect to `self`.
    ///
    /// Returns `0` for the value zero. This count is also the exact number
    /// of squaring steps the exponentiation drivers perform, so both sides
    /// must agree on it.
    #[must_use]
    pub const fn bits_vartime(&self) -> u32 {
        let mut i = LIMBS - 1;
        while i > 0 && self.limbs[i].0 == 0 {
            i -= 1;
        }

        Limb::BITS * (i as u32) + self.limbs[i].bits()
    }

    /// Returns `true` if the bit at position `index` is set, `false`
    /// otherwise.
    ///
    /// # Remarks
    /// This operation is variable time with respect to `index` only.
    #[inline(always)]
    #[must_use]
    pub const fn bit_vartime(&self, index: u32) -> bool {
        if index >= Self::BITS {
            false
        } else {
            (self.limbs[(index / Limb::BITS) as usize].0 >> (index % Limb::BITS)) & 1 == 1
        }
    }
}

/// Slice form of [`Uint::bits_vartime`], used by the runtime-width engine.
pub(crate) fn bits_slice_vartime(limbs: &[Limb]) -> u32 {
    let mut i = limbs.len();

    while i > 0 {
        i -= 1;
        if limbs[i].0 != 0 {
            return Limb::BITS * (i as u32) + limbs[i].bits();
        }
    }

    0
}

/// Slice form of [`Uint::bit_vartime`], used by the runtime-width engine.
#[inline(always)]
pub(crate) fn bit_slice_vartime(limbs: &[Limb], index: u32) -> bool {
    (limbs[(index / Limb::BITS) as usize].0 >> (index % Limb::BITS)) & 1 == 1
}
