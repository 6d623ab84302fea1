//! Modular arithmetic in the Montgomery domain.
//!
//! The fixed-width engine lives on [`MontyParams`]: construct it from a
//! caller-supplied modulus and precomputed Montgomery constants, then call
//! [`MontyParams::modpow_vartime`]. The runtime-width engine is
//! [`DynMontyParams`], bounded at [`MAX_LIMBS`] limbs.

mod mul;
mod params;
mod pow;
mod runtime;

pub use self::{
    params::MontyParams,
    runtime::{DynMontyParams, MAX_LIMBS},
};
