//! Limb addition

use crate::{Limb, Word, primitives::carrying_add};
use core::ops::{Add, AddAssign};
use num_traits::WrappingAdd;
use subtle::CtOption;

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the
    /// new carry.
    #[inline(always)]
    #[must_use]
    pub const fn adc(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_add(self.0, rhs.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self + rhs`, returning the result along with the carry.
    #[inline(always)]
    #[must_use]
    pub const fn overflowing_add(self, rhs: Limb) -> (Limb, Limb) {
        let (res, carry) = self.0.overflowing_add(rhs.0);
        (Limb(res), Limb(carry as Word))
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_add(rhs.0))
    }

    /// Perform checked addition, returning a falsy [`CtOption`] on overflow.
    #[inline]
    pub fn checked_add(&self, rhs: &Self) -> CtOption<Self> {
        let (result, carry) = self.overflowing_add(*rhs);
        CtOption::new(result, carry.is_zero())
    }
}

impl Add for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.checked_add(&rhs)
            .expect("attempted to add with overflow")
    }
}

impl Add<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &Self) -> Self {
        self + *rhs
    }
}

impl AddAssign for Limb {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl WrappingAdd for Limb {
    #[inline]
    fn wrapping_add(&self, v: &Self) -> Self {
        self.wrapping_add(*v)
    }
}
