//! Deterministic test doubles for [`crate::random::Csprng`], in the same
//! spirit as the teacher's `NoEntropy` (`src/test/fortuna.rs`): a fixed
//! sequence stands in for real randomness so primality and key-generation
//! tests are reproducible.

use crate::random::Csprng;

/// A [`Csprng`] that repeats a fixed byte sequence forever.
///
/// Used wherever a test needs *some* witness/prime/exponent search to
/// terminate without pulling in a real entropy source — the sequence only
/// needs to be varied enough that the Solovay–Strassen witness loop and the
/// prime/exponent searches don't get stuck always drawing the same value.
pub(crate) struct CyclingCsprng<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CyclingCsprng<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        assert!(!bytes.is_empty(), "a cycling sequence needs at least one byte");
        Self { bytes, pos: 0 }
    }
}

impl Csprng for CyclingCsprng<'_> {
    fn next(&mut self) -> u8 {
        let b = self.bytes[self.pos];
        self.pos = (self.pos + 1) % self.bytes.len();
        b
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cycles_back_to_the_start() {
        let mut rng = CyclingCsprng::new(&[1, 2, 3]);
        let drawn: Vec<_> = (0..7).map(|_| rng.next()).collect();
        assert_eq!(drawn, [1, 2, 3, 1, 2, 3, 1]);
    }
}
