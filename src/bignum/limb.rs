//! The limb store: the owning buffer for a little-endian sequence of
//! fixed-width unsigned limbs, and the normalization invariant every other
//! module in [`crate::bignum`] relies on.

use std::fmt;

#[cfg(all(feature = "limb8", feature = "limb16"))]
compile_error!("the `limb8` and `limb16` features are mutually exclusive");

#[cfg(feature = "limb8")]
mod width {
    pub type Limb = u8;
    pub type DoubleLimb = u16;
}
#[cfg(all(feature = "limb16", not(feature = "limb8")))]
mod width {
    pub type Limb = u16;
    pub type DoubleLimb = u32;
}
#[cfg(not(any(feature = "limb8", feature = "limb16")))]
mod width {
    pub type Limb = u32;
    pub type DoubleLimb = u64;
}

/// The limb width, `W`, and the base, `B = 2^W`, are fixed at compile time
/// through the mutually exclusive `limb8`/`limb16` Cargo features (`u32` by
/// default). This mirrors the `word`/`dword` typedef pair selected by
/// `BN_UINT_MAX` in the original C implementation this crate was distilled
/// from; arithmetic semantics are identical at every width, only performance
/// and the sizes useful for testing change.
pub use width::{DoubleLimb, Limb};

pub(crate) const LIMB_BITS: u32 = Limb::BITS;
pub(crate) const LIMB_BYTES: usize = std::mem::size_of::<Limb>();

/// An arbitrary-precision non-negative integer.
///
/// Represented as a little-endian sequence of base-`B` limbs with no
/// trailing zero limbs: the value is zero exactly when the limb vector is
/// empty, and otherwise the highest-index limb is always non-zero. Every
/// operation in this crate restores this invariant before returning.
///
/// `Bignum` owns its limb buffer outright (a plain `Vec<Limb>`); there is no
/// manual allocation or release to manage, and cloning is always a deep
/// copy.
#[derive(Clone, Default)]
pub struct Bignum {
    pub(crate) limbs: Vec<Limb>,
}

impl Bignum {
    /// The value zero, i.e. an empty limb sequence.
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Build a normalized bignum from a limb vector, stripping any trailing
    /// zero limbs.
    pub(crate) fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut n = Self { limbs };
        n.normalize();
        n
    }

    /// True if this bignum represents zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// The number of significant limbs (zero for the value zero).
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// The limbs of this bignum, least significant first, with no trailing
    /// zero limb.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Strip trailing zero limbs, restoring the normalization invariant.
    /// Every mutating operation in this module ends by calling this.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Ensure the underlying buffer can hold at least `n` limbs without
    /// reallocating. Capacity never shrinks.
    pub(crate) fn ensure_capacity(&mut self, n: usize) {
        if self.limbs.capacity() < n {
            self.limbs.reserve(n - self.limbs.len());
        }
    }

    /// The limb at index `i`, or zero if `i` is past the significant limbs.
    /// Reading "beyond the end" like this is how the additive/multiplicative
    /// cores treat operands of differing lengths uniformly.
    pub(crate) fn limb(&self, i: usize) -> Limb {
        self.limbs.get(i).copied().unwrap_or(0)
    }

    /// The number of significant bits (zero for the value zero).
    pub fn bits(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                (self.limbs.len() - 1) * LIMB_BITS as usize
                    + (LIMB_BITS - top.leading_zeros()) as usize
            }
        }
    }

    /// The bit at index `i`, zero-indexed from the least significant bit.
    pub(crate) fn bit(&self, i: usize) -> bool {
        let limb = i / LIMB_BITS as usize;
        let bit = i % LIMB_BITS as usize;
        (self.limb(limb) >> bit) & 1 != 0
    }

    /// Set the bit at index `i`, growing the limb vector if necessary.
    pub(crate) fn set_bit(&mut self, i: usize) {
        let limb = i / LIMB_BITS as usize;
        let bit = i % LIMB_BITS as usize;
        if limb >= self.limbs.len() {
            self.limbs.resize(limb + 1, 0);
        }
        self.limbs[limb] |= 1 << bit;
    }

    /// Multiply by two: shift every limb left by one bit, carrying the
    /// overflowed top bit of each limb into the next. Used by the bit-level
    /// long division in [`super::muldiv`] to grow the running remainder one
    /// bit at a time.
    pub(crate) fn shl1(&mut self) {
        let mut carry: Limb = 0;
        for limb in self.limbs.iter_mut() {
            let next_carry = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = next_carry;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Divide by two, rounding down: shift every limb right by one bit,
    /// carrying the underflowed bottom bit of each limb into the one below
    /// it. Used by the Jacobi symbol recursion to factor powers of two out
    /// of its argument.
    pub(crate) fn shr1(&mut self) {
        let mut carry: Limb = 0;
        for limb in self.limbs.iter_mut().rev() {
            let next_carry = *limb & 1;
            *limb = (*limb >> 1) | (carry << (LIMB_BITS - 1));
            carry = next_carry;
        }
        self.normalize();
    }
}

impl From<Limb> for Bignum {
    fn from(w: Limb) -> Self {
        if w == 0 {
            Self::zero()
        } else {
            Self { limbs: vec![w] }
        }
    }
}

impl fmt::Debug for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bignum({self})")
    }
}
