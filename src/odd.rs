//! Wrapper type for odd integers.

use crate::{Limb, Uint};
use core::{fmt, ops::Deref};
use subtle::CtOption;

/// Wrapper type for odd integers.
///
/// These are frequently used in cryptography, e.g. as a modulus: the
/// Montgomery reduction constant `−n⁻¹ mod 2⁶⁴` only exists for odd `n`,
/// so the exponentiation engine accepts its modulus through this type and
/// an even modulus is unrepresentable rather than undefined behavior.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Odd<T>(pub(crate) T);

impl<T> Odd<T> {
    /// Provides access to the contents of [`Odd`] in a `const` context.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl<const LIMBS: usize> Odd<Uint<LIMBS>> {
    /// Create a new odd integer, returning a falsy [`CtOption`] if the
    /// value is even.
    pub fn new(n: Uint<LIMBS>) -> CtOption<Self> {
        let is_odd = n.is_odd();
        CtOption::new(Self(n), is_odd)
    }
}

impl<T> AsRef<T> for Odd<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<[Limb]> for Odd<T>
where
    T: AsRef<[Limb]>,
{
    fn as_ref(&self) -> &[Limb] {
        self.0.as_ref()
    }
}

impl<T> Deref for Odd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Odd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
