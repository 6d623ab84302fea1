//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};
use core::ops::{Sub, SubAssign};
use num_traits::WrappingSub;
use subtle::CtOption;

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow (`ZERO` or `MAX`).
    #[inline(always)]
    #[must_use]
    pub const fn sbb(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }

    /// Perform checked subtraction, returning a falsy [`CtOption`] on
    /// underflow.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> CtOption<Self> {
        let (result, borrow) = self.sbb(*rhs, Limb::ZERO);
        CtOption::new(result, borrow.is_zero())
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(&rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &Self) -> Self {
        self - *rhs
    }
}

impl SubAssign for Limb {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl WrappingSub for Limb {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        self.wrapping_sub(*v)
    }
}
