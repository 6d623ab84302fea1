//! Random number generator support

use super::Uint;
use crate::Limb;
use rand_core::RngCore;

#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl<const LIMBS: usize> Uint<LIMBS> {
    /// Generate a uniformly random [`Uint`].
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for limb in &mut limbs {
            *limb = Limb::random(rng);
        }

        Self { limbs }
    }
}
