//! Modular exponentiation in the Montgomery domain.
//!
//! For small exponents plain left-to-right binary exponentiation is used;
//! larger exponents switch to sliding-window exponentiation over a table of
//! precomputed odd powers, with the window width chosen from the exponent's
//! bit length.

use super::mul::{mul_montgomery_form, square_montgomery_form};
use super::params::MontyParams;
use crate::{Limb, Uint, Word};

/// Largest supported window width in bits.
const MAX_WINDOW: u32 = 5;

/// Number of odd-power table entries for the largest window.
const MAX_ODD_POWERS: usize = 1 << (MAX_WINDOW - 1);

/// Select the window width in bits for an exponent of `exp_bits` bits.
///
/// A wider window saves multiplications while scanning the exponent but
/// doubles the odd-power table (and its precomputation cost) per extra bit;
/// the thresholds below are tuned empirically rather than derived.
const fn window_size(exp_bits: u32) -> u32 {
    if exp_bits < 18 {
        1
    } else if exp_bits < 48 {
        3
    } else if exp_bits < 144 {
        4
    } else {
        MAX_WINDOW
    }
}

impl<const LIMBS: usize> MontyParams<LIMBS> {
    /// Computes `base^exponent mod modulus` in variable time.
    ///
    /// `base` and the result are ordinary (non-Montgomery) residues; `base`
    /// must be `< modulus`. An all-zero exponent yields `1`.
    ///
    /// The exponent's bit length selects between plain binary
    /// exponentiation and sliding-window exponentiation; both paths compute
    /// the same function.
    pub fn modpow_vartime(&self, base: &Uint<LIMBS>, exponent: &Uint<LIMBS>) -> Uint<LIMBS> {
        let exp_bits = exponent.bits_vartime();
        if exp_bits == 0 {
            return Uint::ONE;
        }

        let base_mont = self.to_montgomery_vartime(base);
        let k = window_size(exp_bits);

        let acc = if k == 1 {
            self.pow_binary(&base_mont, exponent, exp_bits)
        } else {
            self.pow_sliding_window(&base_mont, exponent, exp_bits, k)
        };

        self.from_montgomery_vartime(&acc)
    }

    /// Computes `base^exponent mod modulus` in variable time using plain
    /// left-to-right binary exponentiation, regardless of the exponent's
    /// size.
    ///
    /// Same contract as [`Self::modpow_vartime`] and bit-for-bit the same
    /// results; exposed separately because the two scan strategies are
    /// independently useful (and independently testable).
    pub fn modpow_binary_vartime(&self, base: &Uint<LIMBS>, exponent: &Uint<LIMBS>) -> Uint<LIMBS> {
        let exp_bits = exponent.bits_vartime();
        if exp_bits == 0 {
            return Uint::ONE;
        }

        let base_mont = self.to_montgomery_vartime(base);
        let acc = self.pow_binary(&base_mont, exponent, exp_bits);
        self.from_montgomery_vartime(&acc)
    }

    /// Square-and-multiply over the top `exp_bits` bits of the exponent.
    /// `base_mont` is in the Montgomery domain, as is the returned
    /// accumulator.
    fn pow_binary(
        &self,
        base_mont: &Uint<LIMBS>,
        exponent: &Uint<LIMBS>,
        exp_bits: u32,
    ) -> Uint<LIMBS> {
        // 1 in Montgomery form
        let mut acc = self.to_montgomery_vartime(&Uint::ONE);
        let mut i = exp_bits;

        while i > 0 {
            i -= 1;
            acc = square_montgomery_form(&acc, self.modulus(), self.mod_neg_inv());

            if exponent.bit_vartime(i) {
                acc = mul_montgomery_form(&acc, base_mont, self.modulus(), self.mod_neg_inv());
            }
        }

        acc
    }

    /// Sliding-window scan over the exponent, most significant bit first.
    ///
    /// Only odd window values are tabulated, so each extracted window is
    /// normalized by stripping trailing zero bits (deferring those
    /// squarings), and runs of zero bits between windows cost one squaring
    /// each.
    fn pow_sliding_window(
        &self,
        base_mont: &Uint<LIMBS>,
        exponent: &Uint<LIMBS>,
        exp_bits: u32,
        k: u32,
    ) -> Uint<LIMBS> {
        debug_assert!((2..=MAX_WINDOW).contains(&k));

        // powers[i] = base^(2i+1) in Montgomery form; entries beyond
        // 2^(k-1) stay untouched and are never read.
        let mut powers = [*base_mont; MAX_ODD_POWERS];
        let g2 = square_montgomery_form(base_mont, self.modulus(), self.mod_neg_inv());

        let mut i = 1;
        while i < (1usize << (k - 1)) {
            powers[i] =
                mul_montgomery_form(&powers[i - 1], &g2, self.modulus(), self.mod_neg_inv());
            i += 1;
        }

        let mut acc = Uint::ZERO;
        // The accumulator starts as the implicit multiplicative identity;
        // the first window assigns it instead of multiplying.
        let mut is_identity = true;

        // Global cursor over the exponent bits, starting at the highest set
        // bit; the scan is done once it drops below zero.
        let mut pos = exp_bits as i32 - 1;

        while pos >= 0 {
            // The bit at `pos` is set here, so the window value is nonzero.
            let mut w = extract_window(exponent, pos, k);
            let mut n_squares = k;

            // Normalize to an odd window, deferring the squarings owed for
            // the stripped low bits.
            while w & 1 == 0 {
                w >>= 1;
                n_squares -= 1;
            }

            pos -= n_squares as i32;

            if is_identity {
                acc = powers[(w >> 1) as usize];
                is_identity = false;
            } else {
                let mut s = 0;
                while s < n_squares {
                    acc = square_montgomery_form(&acc, self.modulus(), self.mod_neg_inv());
                    s += 1;
                }

                acc = mul_montgomery_form(
                    &acc,
                    &powers[(w >> 1) as usize],
                    self.modulus(),
                    self.mod_neg_inv(),
                );
            }

            // Coast over zero bits until the next window (or the end),
            // squaring once per bit.
            while pos >= 0 && !exponent.bit_vartime(pos as u32) {
                acc = square_montgomery_form(&acc, self.modulus(), self.mod_neg_inv());
                pos -= 1;
            }
        }

        acc
    }
}

/// Extract a `k`-bit window whose most significant bit sits at `pos`,
/// combining bits from two limbs when the window straddles a limb boundary.
/// Bit positions below zero read as zero.
fn extract_window<const LIMBS: usize>(exponent: &Uint<LIMBS>, pos: i32, k: u32) -> Word {
    let limb = (pos as u32 / Limb::BITS) as usize;
    let bit = pos as u32 % Limb::BITS;
    let k1 = k - 1;
    let mask: Word = (1 << k) - 1;

    if bit >= k1 {
        (exponent.as_limbs()[limb].0 >> (bit - k1)) & mask
    } else {
        let mut w = (exponent.as_limbs()[limb].0 & ((1 << (bit + 1)) - 1)) << (k1 - bit);
        if limb > 0 {
            w |= exponent.as_limbs()[limb - 1].0 >> (Limb::BITS + bit - k1);
        }
        w
    }
}
