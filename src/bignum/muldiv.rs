//! The multiplicative core: school-book multiplication, and the bit-level
//! long division that the whole modular layer is built on.

use {
    super::{Bignum, DoubleLimb, Limb},
    std::{fmt, ops},
};

/// Raised by [`Bignum::checked_div_rem`] — and, as a panic, by the `/`/`%`
/// operators and [`super::modpow`] — when the divisor or modulus is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "division by zero")
    }
}

impl std::error::Error for DivideByZero {}

impl ops::Mul for &Bignum {
    type Output = Bignum;

    /// Classical school-book multiplication. Result must not alias either
    /// input (it is built up from scratch in a fresh buffer zeroed to
    /// `len(a) + len(b)` limbs, so aliasing cannot arise from this impl).
    ///
    /// FFT and Karatsuba were not justified at the key sizes this crate
    /// targets — the original implementation this is distilled from notes
    /// the same tradeoff.
    fn mul(self, rhs: &Bignum) -> Bignum {
        if self.is_zero() || rhs.is_zero() {
            return Bignum::zero();
        }
        let mut limbs = vec![0 as Limb; self.limbs.len() + rhs.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry: DoubleLimb = 0;
            for (j, &b) in rhs.limbs.iter().enumerate() {
                let acc = limbs[i + j] as DoubleLimb + a as DoubleLimb * b as DoubleLimb + carry;
                limbs[i + j] = acc as Limb;
                carry = acc >> Limb::BITS;
            }
            let mut k = i + rhs.limbs.len();
            while carry != 0 {
                let acc = limbs[k] as DoubleLimb + carry;
                limbs[k] = acc as Limb;
                carry = acc >> Limb::BITS;
                k += 1;
            }
        }
        Bignum::from_limbs(limbs)
    }
}

impl ops::Mul for Bignum {
    type Output = Bignum;

    fn mul(self, rhs: Bignum) -> Bignum {
        &self * &rhs
    }
}

impl ops::MulAssign<&Bignum> for Bignum {
    /// Computed into a scratch bignum and swapped in, so that `self` can
    /// alias `rhs` safely (the out-of-place multiply above cannot write
    /// into either input while reading it).
    fn mul_assign(&mut self, rhs: &Bignum) {
        *self = &*self * rhs;
    }
}

impl Bignum {
    /// Divide `self` by `divisor`, producing `(quotient, remainder)` such
    /// that `self == quotient * divisor + remainder` and
    /// `0 <= remainder < divisor`. Fails with [`DivideByZero`] if `divisor`
    /// is zero.
    ///
    /// If `self < divisor` the quotient is trivially zero and the remainder
    /// is `self` (not `divisor` — the original docstring this was
    /// distilled from says otherwise, but the arithmetic, and the code,
    /// says `self`).
    ///
    /// Otherwise this is bit-level long division: for each bit of `self`
    /// from most to least significant, double the running remainder,
    /// bring down the next bit of `self`, and subtract `divisor` out of it
    /// whenever it fits, recording a quotient bit of one each time it does.
    /// This runs in `O(bits(self) * limbs(divisor))` and is correct for any
    /// divisor; no other division algorithm is used anywhere in this crate.
    pub fn checked_div_rem(&self, divisor: &Bignum) -> Result<(Bignum, Bignum), DivideByZero> {
        if divisor.is_zero() {
            return Err(DivideByZero);
        }
        if self < divisor {
            return Ok((Bignum::zero(), self.clone()));
        }
        let mut q = Bignum::zero();
        q.ensure_capacity(self.limbs.len());
        let mut r = Bignum::zero();
        for i in (0..self.bits()).rev() {
            r.shl1();
            if self.bit(i) {
                r.set_bit(0);
            }
            if &r >= divisor {
                r = r.checked_sub(divisor).expect("r >= divisor was just checked");
                q.set_bit(i);
            }
        }
        q.normalize();
        r.normalize();
        Ok((q, r))
    }

    /// `(self / divisor, self % divisor)`. Panics if `divisor` is zero; see
    /// [`Bignum::checked_div_rem`] for a non-panicking version.
    pub fn div_rem(&self, divisor: &Bignum) -> (Bignum, Bignum) {
        self.checked_div_rem(divisor).expect("division by zero")
    }
}

impl ops::Div for &Bignum {
    type Output = Bignum;

    fn div(self, rhs: &Bignum) -> Bignum {
        self.div_rem(rhs).0
    }
}

impl ops::Rem for &Bignum {
    type Output = Bignum;

    fn rem(self, rhs: &Bignum) -> Bignum {
        self.div_rem(rhs).1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mul_is_commutative() {
        let a = Bignum::from_limbs(vec![Limb::MAX, 3]);
        let b = Bignum::from_limbs(vec![7, 11]);
        assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_is_associative() {
        let a = Bignum::from_limbs(vec![Limb::MAX, 3]);
        let b = Bignum::from_limbs(vec![7, 11]);
        let c = Bignum::from_limbs(vec![1, 2]);
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn mul_distributes_over_add() {
        let a = Bignum::from_limbs(vec![Limb::MAX, 3]);
        let b = Bignum::from_limbs(vec![7, 11]);
        let c = Bignum::from_limbs(vec![1, 2]);
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let a = Bignum::from_limbs(vec![1, 2, 3]);
        assert!((&a * &Bignum::zero()).is_zero());
    }

    #[test]
    fn div_rem_identity() {
        let a = Bignum::from_limbs(vec![123, 456, 789]);
        let b = Bignum::from_limbs(vec![17, 3]);
        let (q, r) = a.div_rem(&b);
        assert!(r < b);
        assert_eq!(&(&q * &b) + &r, a);
    }

    #[test]
    fn div_smaller_than_divisor() {
        let a = Bignum::from(5 as Limb);
        let b = Bignum::from(9 as Limb);
        let (q, r) = a.div_rem(&b);
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    #[test]
    fn div_by_zero_is_reported() {
        let a = Bignum::from(5 as Limb);
        assert_eq!(a.checked_div_rem(&Bignum::zero()), Err(DivideByZero));
    }

    #[test]
    fn large_division_matches_known_quotient_and_remainder() {
        let dividend: Bignum = "1000000000000000000".parse().unwrap();
        let divisor: Bignum = "999999999".parse().unwrap();
        let (q, r) = dividend.div_rem(&divisor);
        assert_eq!(q, "1000000001".parse().unwrap());
        assert_eq!(r, "1".parse::<Bignum>().unwrap());
        assert_eq!(&(&q * &divisor) + &r, dividend);
    }
}
