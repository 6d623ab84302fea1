//! Common functionality shared between tests.
//!
//! The library never derives the Montgomery constants, so the helpers here
//! do: `mod_neg_inv` via modular inversion over `2⁶⁴` and `r2` by direct
//! reduction of `R²`.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use monty_modexp::{Limb, Odd, Uint, modular::MontyParams};
use num_bigint::BigUint;
use num_modular::ModularUnaryOps;

/// Limb slice to `num_bigint::BigUint`.
pub fn to_biguint(limbs: &[Limb]) -> BigUint {
    let mut bytes = Vec::with_capacity(limbs.len() * Limb::BYTES);

    for limb in limbs {
        bytes.extend_from_slice(&limb.0.to_le_bytes());
    }

    BigUint::from_bytes_le(&bytes)
}

/// `num_bigint::BigUint` to fixed-width [`Uint`]; panics if it doesn't fit.
pub fn to_uint<const LIMBS: usize>(x: &BigUint) -> Uint<LIMBS> {
    let digits = x.to_u64_digits();
    assert!(digits.len() <= LIMBS, "value too wide for {} limbs", LIMBS);

    let mut words = [0u64; LIMBS];
    words[..digits.len()].copy_from_slice(&digits);
    Uint::from_words(words)
}

/// `num_bigint::BigUint` to a limb vector of exactly `nlimbs` limbs.
pub fn to_limbs(x: &BigUint, nlimbs: usize) -> Vec<Limb> {
    let digits = x.to_u64_digits();
    assert!(digits.len() <= nlimbs, "value too wide for {nlimbs} limbs");

    let mut limbs = vec![Limb(0); nlimbs];
    for (limb, digit) in limbs.iter_mut().zip(&digits) {
        *limb = Limb(*digit);
    }
    limbs
}

/// `−n⁻¹ mod 2⁶⁴` for an odd modulus `n`.
pub fn mod_neg_inv(n: &BigUint) -> Limb {
    let r = BigUint::from(1u8) << 64;
    let reduced: BigUint = n % &r;
    let inv = reduced.invm(&r).expect("modulus must be odd");
    let neg = (&r - inv) % &r;

    Limb(neg.to_u64_digits().first().copied().unwrap_or(0))
}

/// `R² mod n` for `R = 2^(64·nlimbs)`.
pub fn r2(n: &BigUint, nlimbs: usize) -> BigUint {
    (BigUint::from(1u8) << (128 * nlimbs)) % n
}

/// Assemble fixed-width parameters for an odd `BigUint` modulus.
pub fn params_for<const LIMBS: usize>(n: &BigUint) -> MontyParams<LIMBS> {
    let modulus = Odd::new(to_uint::<LIMBS>(n)).expect("modulus must be odd");
    MontyParams::new(modulus, to_uint::<LIMBS>(&r2(n, LIMBS)), mod_neg_inv(n))
}
