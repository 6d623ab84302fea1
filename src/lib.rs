//! Pure Rust implementation of Montgomery modular exponentiation, designed
//! as a freestanding computational kernel.
//!
//! # About
//! This crate implements the arithmetic core behind RSA-style public-key
//! operations: Montgomery multiplication using the Coarsely Integrated
//! Operand Scanning (CIOS) method, and a sliding-window exponentiation
//! driver built on top of it. Two engines share the algorithmic contract:
//!
//! - A width-specialized engine over [`Uint`] (compile-time limb count,
//!   e.g. [`U256`]) which selects a window size from the exponent's bit
//!   length and precomputes a table of odd powers.
//! - A runtime-width engine ([`modular::DynMontyParams`]) bounded at
//!   [`modular::MAX_LIMBS`] limbs, which always runs plain binary
//!   exponentiation.
//!
//! The Montgomery constants `rr` (`R² mod n`) and `mod_neg_inv`
//! (`−n⁻¹ mod 2⁶⁴`) are supplied by the caller and never derived here;
//! this crate also performs no parsing, padding, or key generation.
//!
//! # Goals
//! - No heap allocations and no runtime support: every buffer is a
//!   fixed-capacity stack array, making the kernel suitable for embedding
//!   in freestanding or position-independent execution contexts.
//! - No unsafe code.
//! - `const fn` limb arithmetic where possible.
//!
//! # ⚠️ Security Warning
//! The exponentiation and reduction paths are **variable-time**: the final
//! conditional subtraction and the window scan branch on secret-dependent
//! data. Every such entry point carries a `_vartime` suffix. Do not use this
//! crate where timing side channels are part of the threat model.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod limb;
mod odd;
mod primitives;
mod uint;
mod word;

pub mod modular;

pub use crate::{
    limb::Limb,
    odd::Odd,
    uint::{U256, U512, U1024, Uint},
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "rand")]
pub use rand_core;
