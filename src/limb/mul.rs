//! Limb multiplication

use crate::{Limb, WideWord, Word, primitives::carrying_mul_add};
use core::ops::{Mul, MulAssign};
use num_traits::WrappingMul;
use subtle::CtOption;

impl Limb {
    /// Computes `self + (b * c) + carry`, returning the result along with
    /// the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn mac(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(b.0, c.0, self.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }

    /// Compute "wide" multiplication, with a product twice the size of the
    /// input.
    pub(crate) const fn mul_wide(&self, rhs: Self) -> (Self, Self) {
        let ret = (self.0 as WideWord) * (rhs.0 as WideWord);
        (Limb(ret as Word), Limb((ret >> Word::BITS) as Word))
    }

    /// Perform checked multiplication, returning a falsy [`CtOption`] on
    /// overflow.
    #[inline]
    pub fn checked_mul(&self, rhs: &Self) -> CtOption<Self> {
        let (lo, hi) = self.mul_wide(*rhs);
        CtOption::new(lo, hi.is_zero())
    }
}

impl Mul for Limb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(&rhs)
            .expect("attempted to multiply with overflow")
    }
}

impl Mul<&Self> for Limb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: &Self) -> Self {
        self * *rhs
    }
}

impl MulAssign for Limb {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl WrappingMul for Limb {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        self.wrapping_mul(*v)
    }
}
