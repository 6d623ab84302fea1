//! Random number generator support

use crate::Limb;
use rand_core::RngCore;

#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl Limb {
    /// Generate a random limb.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(rng.next_u64())
    }
}
