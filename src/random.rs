//! The random-number source: an external collaborator this crate only
//! consumes through a trait, never implements itself.

use crate::bignum::{Limb, LIMB_BYTES};

/// Cryptographically secure pseudorandom number generator, producing one
/// byte at a time.
///
/// This is the only contract the arithmetic core and the RSA façade have
/// with randomness: given a source of bytes, [`random_limb`] assembles one
/// uniform random limb, and everything built on top of that (random decimal
/// digits, prime search, key generation) goes through that single
/// primitive. Seeding, reseeding, and entropy collection are the
/// implementor's responsibility — deterministic test doubles and real
/// CSPRNGs alike satisfy this trait identically.
pub trait Csprng {
    fn next(&mut self) -> u8;

    fn iter(&mut self) -> impl Iterator<Item = u8>
    where
        Self: Sized,
    {
        CsprngIter(self)
    }
}

struct CsprngIter<'a, C>(&'a mut C);

impl<C: Csprng> Iterator for CsprngIter<'_, C> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.next())
    }
}

/// Assemble a single uniform random limb from `size_of::<Limb>()` calls to
/// a byte-level [`Csprng`], least significant byte first.
pub(crate) fn random_limb(rng: &mut impl Csprng) -> Limb {
    let mut buf = [0u8; LIMB_BYTES];
    for b in buf.iter_mut() {
        *b = rng.next();
    }
    Limb::from_le_bytes(buf)
}

/// Adapts any [`rand::RngCore`] into a [`Csprng`]. Kept as an ordinary,
/// always-available adapter (gated only on `rand` being reachable, which it
/// is for tests and doctests) rather than hidden behind a crate feature —
/// the teacher keeps its own [`Csprng`] implementors (e.g. `Fortuna`) as
/// first-class, non-test-only types, and there is nothing test-specific
/// about "drive a byte at a time from an `RngCore`".
#[cfg(any(test, doctest))]
pub struct RandCsprng<R>(pub R);

#[cfg(any(test, doctest))]
impl<R: rand::RngCore> Csprng for RandCsprng<R> {
    fn next(&mut self) -> u8 {
        self.0.next_u32() as u8
    }
}
