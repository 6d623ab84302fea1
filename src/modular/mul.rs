//! Montgomery multiplication using the CIOS (Coarsely Integrated Operand
//! Scanning) method.
//!
//! Operand scanning and reduction are interleaved: each row of the scan
//! multiply-accumulates one limb of `a` into the accumulator, derives the
//! reduction multiplier from the accumulator's low limb, folds in a row of
//! the modulus, and shifts the accumulator down one limb. After `LIMBS`
//! rows the value is `< 2n` and a single conditional subtraction yields a
//! reduced residue.

use crate::{Limb, Odd, Uint};
use core::cmp::Ordering;

/// Wide accumulator for one CIOS pass: `LIMBS` low limbs, one high limb,
/// and a spill word for carries that escape the high limb.
///
/// `LIMBS + 1` limbs are not enough to hold every carry chain the two
/// multiply-accumulate rows can produce, so the spill word is tracked
/// explicitly instead of being folded into `hi`.
#[derive(Clone, Copy)]
struct Accumulator<const LIMBS: usize> {
    lo: [Limb; LIMBS],
    hi: Limb,
    spill: Limb,
}

impl<const LIMBS: usize> Accumulator<LIMBS> {
    const ZERO: Self = Self {
        lo: [Limb::ZERO; LIMBS],
        hi: Limb::ZERO,
        spill: Limb::ZERO,
    };

    /// Add `x · y` into the accumulator: one multiply-accumulate row of the
    /// scan, with the carry-out folded into `hi` and any carry beyond that
    /// accumulated in `spill`.
    #[inline(always)]
    const fn mul_add_row(&mut self, x: Limb, y: &[Limb; LIMBS]) {
        let mut carry = Limb::ZERO;
        let mut j = 0;

        while j < LIMBS {
            let (w, c) = self.lo[j].mac(x, y[j], carry);
            self.lo[j] = w;
            carry = c;
            j += 1;
        }

        let (hi, c) = self.hi.adc(carry, Limb::ZERO);
        self.hi = hi;
        self.spill = self.spill.wrapping_add(c);
    }

    /// Divide by the limb radix: discard the (now zero) low limb and pull
    /// the spill word back into the high limb.
    #[inline(always)]
    const fn shift_down(&mut self) {
        let mut j = 0;

        while j < LIMBS - 1 {
            self.lo[j] = self.lo[j + 1];
            j += 1;
        }

        self.lo[LIMBS - 1] = self.hi;
        self.hi = self.spill;
        self.spill = Limb::ZERO;
    }

    /// Final conditional subtraction. The accumulated value is `< 2n` here:
    /// a nonzero residual high limb forces the subtraction, otherwise a
    /// most-significant-first comparison against the modulus decides.
    fn reduce(&self, modulus: &Uint<LIMBS>) -> Uint<LIMBS> {
        let value = Uint::new(self.lo);

        if self.hi.0 != 0 || value.cmp_vartime(modulus) != Ordering::Less {
            value.wrapping_sub(modulus)
        } else {
            value
        }
    }
}

/// Computes `a · b · R⁻¹ mod modulus`, where `R = 2^(64·LIMBS)`.
///
/// Both `a` and `b` must be reduced residues (`< modulus`); the result then
/// is one too. `mod_neg_inv` must satisfy the Montgomery inverse relation
/// for the modulus — violations yield undefined numeric output.
pub(crate) fn mul_montgomery_form<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
) -> Uint<LIMBS> {
    let mut acc = Accumulator::<LIMBS>::ZERO;
    let mut i = 0;

    while i < LIMBS {
        acc.mul_add_row(a.limbs[i], &b.limbs);

        // Reduction multiplier for this row; the truncating multiply is the
        // intended mod-2⁶⁴ arithmetic.
        let m = acc.lo[0].wrapping_mul(mod_neg_inv);
        acc.mul_add_row(m, &modulus.as_ref().limbs);

        acc.shift_down();
        i += 1;
    }

    acc.reduce(modulus.as_ref())
}

/// Computes `a² · R⁻¹ mod modulus`.
///
/// Defined as multiplication of `a` with itself; no squaring-specific
/// symmetry shortcut is taken.
pub(crate) fn square_montgomery_form<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    modulus: &Odd<Uint<LIMBS>>,
    mod_neg_inv: Limb,
) -> Uint<LIMBS> {
    mul_montgomery_form(a, a, modulus, mod_neg_inv)
}
