//! Runtime-width Montgomery exponentiation.
//!
//! The fixed-width engine monomorphizes per limb count; this variant takes
//! the limb count at runtime instead, bounded at [`MAX_LIMBS`], with every
//! buffer a fixed-capacity stack array. It always runs plain binary
//! exponentiation: the window-size policy of the fixed-width engine is
//! deliberately not applied here (see [`DynMontyParams::modpow_vartime`]).

use crate::uint::{
    bits::{bit_slice_vartime, bits_slice_vartime},
    cmp::cmp_slice_vartime,
    sub::wrapping_sub_assign_slice,
};
use crate::Limb;
use core::cmp::Ordering;
use core::fmt::{self, Debug};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Maximum number of limbs the runtime-width engine supports (1024 bits).
pub const MAX_LIMBS: usize = 16;

/// Parameters to go to/from the Montgomery form for an odd modulus whose
/// width (in limbs) is chosen at runtime.
///
/// As with [`MontyParams`][`crate::modular::MontyParams`], the Montgomery
/// constants are caller-supplied and stored opaque; incorrect constants
/// yield undefined numeric output.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DynMontyParams {
    /// The constant modulus, in the low `nlimbs` limbs.
    modulus: [Limb; MAX_LIMBS],

    /// `R² mod modulus` where `R = 2^(64·nlimbs)`, in the low `nlimbs`
    /// limbs.
    r2: [Limb; MAX_LIMBS],

    /// `−modulus⁻¹ mod 2⁶⁴`.
    mod_neg_inv: Limb,

    /// Active width; limbs at or above this index are zero.
    nlimbs: usize,
}

impl DynMontyParams {
    /// Instantiates a new set of `DynMontyParams` for the modulus in
    /// `modulus`, with caller-precomputed `r2` (= `R² mod modulus` for
    /// `R = 2^(64·modulus.len())`) and `mod_neg_inv` (= `−modulus⁻¹ mod
    /// 2⁶⁴`).
    ///
    /// Returns `None` if `modulus` is empty or wider than [`MAX_LIMBS`],
    /// if `r2` has a different length, or if the modulus is even. An
    /// out-of-range width is a hard failure rather than being clamped:
    /// silently computing at a narrower width than the caller asked for is
    /// never the right answer for a cryptographic primitive.
    pub fn new(modulus: &[Limb], r2: &[Limb], mod_neg_inv: Limb) -> Option<Self> {
        if modulus.is_empty() || modulus.len() > MAX_LIMBS || r2.len() != modulus.len() {
            return None;
        }

        if modulus[0].0 & 1 == 0 {
            return None;
        }

        let mut m = [Limb::ZERO; MAX_LIMBS];
        let mut r = [Limb::ZERO; MAX_LIMBS];
        m[..modulus.len()].copy_from_slice(modulus);
        r[..r2.len()].copy_from_slice(r2);

        Some(Self {
            modulus: m,
            r2: r,
            mod_neg_inv,
            nlimbs: modulus.len(),
        })
    }

    /// Active width of this modulus in limbs.
    pub const fn nlimbs(&self) -> usize {
        self.nlimbs
    }

    /// The modulus these parameters were constructed for.
    pub fn modulus(&self) -> &[Limb] {
        &self.modulus[..self.nlimbs]
    }

    /// Computes `base^exponent mod modulus` in variable time, writing the
    /// reduced result into `out`.
    ///
    /// `base` and the result are ordinary (non-Montgomery) residues; `base`
    /// must be `< modulus`. An all-zero exponent yields `1`.
    ///
    /// Unlike the fixed-width engine this path always runs plain binary
    /// exponentiation, whatever the exponent's size; both engines compute
    /// the same function, the runtime-width one just spends more
    /// multiplications on large exponents.
    ///
    /// # Panics
    /// If `out`, `base`, or `exponent` is not exactly [`Self::nlimbs`]
    /// limbs long.
    pub fn modpow_vartime(&self, out: &mut [Limb], base: &[Limb], exponent: &[Limb]) {
        let n = self.nlimbs;
        assert_eq!(out.len(), n, "output width mismatch");
        assert_eq!(base.len(), n, "base width mismatch");
        assert_eq!(exponent.len(), n, "exponent width mismatch");

        let modulus = &self.modulus[..n];

        let mut one = [Limb::ZERO; MAX_LIMBS];
        one[0] = Limb::ONE;
        let one = &one[..n];

        let exp_bits = bits_slice_vartime(exponent);
        if exp_bits == 0 {
            out[0] = Limb::ONE;
            for limb in &mut out[1..] {
                *limb = Limb::ZERO;
            }
            return;
        }

        let mut base_mont = [Limb::ZERO; MAX_LIMBS];
        mul_montgomery_slice(
            &mut base_mont[..n],
            base,
            &self.r2[..n],
            modulus,
            self.mod_neg_inv,
        );

        // 1 in Montgomery form
        let mut acc = [Limb::ZERO; MAX_LIMBS];
        mul_montgomery_slice(
            &mut acc[..n],
            one,
            &self.r2[..n],
            modulus,
            self.mod_neg_inv,
        );

        let mut tmp = [Limb::ZERO; MAX_LIMBS];
        let mut i = exp_bits;

        while i > 0 {
            i -= 1;

            mul_montgomery_slice(&mut tmp[..n], &acc[..n], &acc[..n], modulus, self.mod_neg_inv);
            acc[..n].copy_from_slice(&tmp[..n]);

            if bit_slice_vartime(exponent, i) {
                mul_montgomery_slice(
                    &mut tmp[..n],
                    &acc[..n],
                    &base_mont[..n],
                    modulus,
                    self.mod_neg_inv,
                );
                acc[..n].copy_from_slice(&tmp[..n]);
            }
        }

        mul_montgomery_slice(out, &acc[..n], one, modulus, self.mod_neg_inv);
    }
}

/// CIOS Montgomery multiplication over limb slices: `out = a · b · R⁻¹ mod
/// modulus` for `R = 2^(64·modulus.len())`.
///
/// The accumulator carries two limbs beyond the active width: one for the
/// running high limb and one more to absorb a carry out of it, so no carry
/// chain is ever lost.
fn mul_montgomery_slice(
    out: &mut [Limb],
    a: &[Limb],
    b: &[Limb],
    modulus: &[Limb],
    mod_neg_inv: Limb,
) {
    let n = modulus.len();
    debug_assert!(n <= MAX_LIMBS);
    debug_assert_eq!(out.len(), n);
    debug_assert_eq!(a.len(), n);
    debug_assert_eq!(b.len(), n);

    let mut acc = [Limb::ZERO; MAX_LIMBS + 2];

    for i in 0..n {
        // acc += a[i] * b
        let mut carry = Limb::ZERO;
        for j in 0..n {
            let (w, c) = acc[j].mac(a[i], b[j], carry);
            acc[j] = w;
            carry = c;
        }
        let (s, c) = acc[n].adc(carry, Limb::ZERO);
        acc[n] = s;
        acc[n + 1] = acc[n + 1].wrapping_add(c);

        // acc += m * modulus, zeroing acc[0]
        let m = acc[0].wrapping_mul(mod_neg_inv);
        let mut carry = Limb::ZERO;
        for j in 0..n {
            let (w, c) = acc[j].mac(m, modulus[j], carry);
            acc[j] = w;
            carry = c;
        }
        let (s, c) = acc[n].adc(carry, Limb::ZERO);
        acc[n] = s;
        acc[n + 1] = acc[n + 1].wrapping_add(c);

        // shift down one limb
        for j in 0..n {
            acc[j] = acc[j + 1];
        }
        acc[n] = acc[n + 1];
        acc[n + 1] = Limb::ZERO;
    }

    // Conditional subtraction: the value is < 2·modulus, and a nonzero
    // residual high limb forces the subtraction.
    out.copy_from_slice(&acc[..n]);
    if acc[n].0 != 0 || cmp_slice_vartime(out, modulus) != Ordering::Less {
        wrapping_sub_assign_slice(out, modulus);
    }
}

impl Debug for DynMontyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynMontyParams")
            .field("modulus", &self.modulus())
            .field("mod_neg_inv", &self.mod_neg_inv)
            .field("nlimbs", &self.nlimbs)
            .finish()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for DynMontyParams {
    fn zeroize(&mut self) {
        self.modulus.zeroize();
        self.r2.zeroize();
        self.mod_neg_inv.zeroize();
    }
}
