//! Comparison and predicates over the normalized limb representation.
//!
//! These operate purely on the already-normalized form: since the
//! normalization invariant guarantees no trailing zero limbs, a longer limb
//! sequence is always the larger value, and equal-length sequences are
//! compared limb by limb from most to least significant.

use super::Bignum;
use std::cmp::Ordering;

impl PartialEq for Bignum {
    fn eq(&self, other: &Self) -> bool {
        self.limbs == other.limbs
    }
}

impl Eq for Bignum {}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bignum {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => self.limbs.iter().rev().cmp(other.limbs.iter().rev()),
            differ => differ,
        }
    }
}
