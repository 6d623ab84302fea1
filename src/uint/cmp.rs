//! [`Uint`] comparison operations.

use super::Uint;
use crate::Limb;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Determine in variable time whether `self` is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero_vartime(&self) -> bool {
        let mut i = 0;

        while i < LIMBS {
            if self.limbs[i].0 != 0 {
                return false;
            }
            i += 1;
        }

        true
    }

    /// Returns the truthy value if `self` is odd, the falsy value otherwise.
    #[inline]
    #[must_use]
    pub fn is_odd(&self) -> Choice {
        self.limbs[0].is_odd()
    }

    /// Returns the [`Ordering`] between `self` and `rhs` in variable time.
    ///
    /// Scans from the most significant limb downward, short-circuiting on
    /// the first difference; this is the comparison that drives the
    /// conditional subtraction after a Montgomery multiplication.
    #[must_use]
    pub const fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        let mut i = LIMBS;

        while i > 0 {
            i -= 1;

            if self.limbs[i].0 < rhs.limbs[i].0 {
                return Ordering::Less;
            }
            if self.limbs[i].0 > rhs.limbs[i].0 {
                return Ordering::Greater;
            }
        }

        Ordering::Equal
    }
}

/// Variable-time most-significant-first comparison of equal-length limb
/// slices, used by the runtime-width engine.
pub(crate) fn cmp_slice_vartime(a: &[Limb], b: &[Limb]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    let mut i = a.len();

    while i > 0 {
        i -= 1;

        if a[i].0 < b[i].0 {
            return Ordering::Less;
        }
        if a[i].0 > b[i].0 {
            return Ordering::Greater;
        }
    }

    Ordering::Equal
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize> PartialEq for Uint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Ord for Uint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl<const LIMBS: usize> PartialOrd for Uint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
