//! Modulus-specific Montgomery form parameters.

use super::mul::mul_montgomery_form;
use crate::{Limb, Odd, Uint};
use core::fmt::{self, Debug};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Parameters to efficiently go to/from the Montgomery form for an odd
/// modulus provided at runtime.
///
/// Both Montgomery constants are supplied by the caller and stored opaque:
/// this engine never derives them. `r2` must equal `R² mod modulus` and
/// `mod_neg_inv` must equal `−modulus⁻¹ mod 2⁶⁴`, where `R = 2^(64·LIMBS)`;
/// values violating either relation produce undefined numeric output from
/// every operation parameterized by these values (but no panic and no
/// memory unsafety).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MontyParams<const LIMBS: usize> {
    /// The constant modulus.
    modulus: Odd<Uint<LIMBS>>,

    /// `R² mod modulus`, used to move into Montgomery form.
    r2: Uint<LIMBS>,

    /// `−modulus⁻¹ mod 2⁶⁴`, the Montgomery reduction constant.
    mod_neg_inv: Limb,
}

impl<const LIMBS: usize> MontyParams<LIMBS> {
    /// Instantiates a new set of `MontyParams` representing the given odd
    /// `modulus`, with caller-precomputed `r2` (= `R² mod modulus`) and
    /// `mod_neg_inv` (= `−modulus⁻¹ mod 2⁶⁴`).
    pub const fn new(modulus: Odd<Uint<LIMBS>>, r2: Uint<LIMBS>, mod_neg_inv: Limb) -> Self {
        Self {
            modulus,
            r2,
            mod_neg_inv,
        }
    }

    /// Returns the modulus which was used to initialize these parameters.
    pub const fn modulus(&self) -> &Odd<Uint<LIMBS>> {
        &self.modulus
    }

    /// `R² mod modulus`, used to move into Montgomery form.
    pub const fn r2(&self) -> &Uint<LIMBS> {
        &self.r2
    }

    /// `−modulus⁻¹ mod 2⁶⁴`.
    pub(crate) const fn mod_neg_inv(&self) -> Limb {
        self.mod_neg_inv
    }

    /// Convert a reduced residue (`value < modulus`) into the Montgomery
    /// domain, i.e. compute `value · R mod modulus`.
    pub fn to_montgomery_vartime(&self, value: &Uint<LIMBS>) -> Uint<LIMBS> {
        mul_montgomery_form(value, &self.r2, &self.modulus, self.mod_neg_inv)
    }

    /// Convert a Montgomery-domain value back to its ordinary residue, i.e.
    /// compute `value · R⁻¹ mod modulus` by multiplying with `1`.
    pub fn from_montgomery_vartime(&self, value: &Uint<LIMBS>) -> Uint<LIMBS> {
        mul_montgomery_form(value, &Uint::ONE, &self.modulus, self.mod_neg_inv)
    }
}

impl<const LIMBS: usize> Debug for MontyParams<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MontyParams")
            .field("modulus", &self.modulus)
            .field("r2", &self.r2)
            .field("mod_neg_inv", &self.mod_neg_inv)
            .finish()
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> Zeroize for MontyParams<LIMBS> {
    fn zeroize(&mut self) {
        self.modulus.0.zeroize();
        self.r2.zeroize();
        self.mod_neg_inv.zeroize();
    }
}
