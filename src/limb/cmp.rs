//! Limb comparisons

use crate::Limb;
use core::cmp::Ordering;
use subtle::{Choice, ConstantTimeEq};

impl Limb {
    /// Is this limb equal to zero?
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns the truthy value if this limb is odd, the falsy value
    /// otherwise.
    #[inline]
    #[must_use]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0 & 1) as u8)
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Eq for Limb {}

impl PartialEq for Limb {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Ord for Limb {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Limb {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
