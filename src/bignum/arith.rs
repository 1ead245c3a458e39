//! The additive core: add and subtract, with carry/borrow propagation done
//! in a double-width accumulator.

use {
    super::{limb::LIMB_BITS, Bignum, DoubleLimb, Limb},
    std::{fmt, ops},
};

/// Raised by [`Bignum::checked_sub`] — and, as a panic, by the `-`/`-=`
/// operators — when the minuend is smaller than the subtrahend. Bignums are
/// always non-negative, so there is no representable result in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underflow;

impl fmt::Display for Underflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bignum subtraction underflowed")
    }
}

impl std::error::Error for Underflow {}

impl ops::Add for &Bignum {
    type Output = Bignum;

    /// `self + rhs`. Processes limbs from least to most significant,
    /// maintaining a one-bit carry in a double-width accumulator; if a
    /// carry remains after the longer operand ends, it becomes one final
    /// limb.
    fn add(self, rhs: &Bignum) -> Bignum {
        let n = self.limbs.len().max(rhs.limbs.len());
        let mut limbs = Vec::with_capacity(n + 1);
        let mut carry: DoubleLimb = 0;
        for i in 0..n {
            let sum = self.limb(i) as DoubleLimb + rhs.limb(i) as DoubleLimb + carry;
            limbs.push(sum as Limb);
            carry = sum >> LIMB_BITS;
        }
        if carry != 0 {
            limbs.push(carry as Limb);
        }
        Bignum::from_limbs(limbs)
    }
}

impl ops::Add for Bignum {
    type Output = Bignum;

    fn add(self, rhs: Bignum) -> Bignum {
        &self + &rhs
    }
}

impl ops::AddAssign<&Bignum> for Bignum {
    /// `self := self + rhs`. Aliasing `self` and `rhs` (`a += &a`) is fine.
    fn add_assign(&mut self, rhs: &Bignum) {
        *self = &*self + rhs;
    }
}

impl Bignum {
    /// `self - rhs`, or [`Underflow`] if `self < rhs`.
    ///
    /// Implemented by borrow-propagating limb subtraction in a double-width
    /// type, relying on unsigned wraparound to detect the borrow at each
    /// limb — the mirror image of [`Add`](ops::Add)'s carry propagation.
    pub fn checked_sub(&self, rhs: &Bignum) -> Result<Bignum, Underflow> {
        if self < rhs {
            return Err(Underflow);
        }
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = false;
        for i in 0..self.limbs.len() {
            let (diff, overflow1) = self.limb(i).overflowing_sub(rhs.limb(i));
            let (diff, overflow2) = diff.overflowing_sub(borrow as Limb);
            limbs.push(diff);
            borrow = overflow1 || overflow2;
        }
        debug_assert!(!borrow, "checked_sub borrowed despite self >= rhs");
        Ok(Bignum::from_limbs(limbs))
    }
}

impl ops::Sub for &Bignum {
    type Output = Bignum;

    /// Panics if `self < rhs`, mirroring how Rust's own unsigned integer
    /// subtraction panics on underflow in debug builds. Use
    /// [`Bignum::checked_sub`] to handle this without panicking.
    fn sub(self, rhs: &Bignum) -> Bignum {
        self.checked_sub(rhs).expect("bignum subtraction underflowed")
    }
}

impl ops::Sub for Bignum {
    type Output = Bignum;

    fn sub(self, rhs: Bignum) -> Bignum {
        &self - &rhs
    }
}

impl ops::SubAssign<&Bignum> for Bignum {
    /// `self := self - rhs`. Panics on underflow; see [`Bignum::checked_sub`].
    fn sub_assign(&mut self, rhs: &Bignum) {
        *self = &*self - rhs;
    }
}
