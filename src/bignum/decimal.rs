//! Decimal I/O: the only boundary between a bignum and ordinary text. The
//! core does not own stdin/stdout wiring — callers parse input and render
//! output through [`std::str::FromStr`] and [`std::fmt::Display`].

use {
    super::{Bignum, Limb},
    crate::random::{random_limb, Csprng},
    std::{fmt, str::FromStr},
};

/// Raised by [`Bignum::from_str`] when the input is empty or contains a
/// character that isn't an ASCII decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDigit;

impl fmt::Display for InvalidDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid decimal digit")
    }
}

impl std::error::Error for InvalidDigit {}

impl FromStr for Bignum {
    type Err = InvalidDigit;

    /// Parses a string of ASCII digits `'0'`–`'9'` (no sign, no whitespace,
    /// no base prefix) left to right: multiply the accumulator by ten, add
    /// the digit. Leading zeros are accepted and discarded; an empty string
    /// is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidDigit);
        }
        let ten = Bignum::from(10 as Limb);
        let mut n = Bignum::zero();
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(InvalidDigit)?;
            n = &n * &ten;
            n += &Bignum::from(digit as Limb);
        }
        Ok(n)
    }
}

impl fmt::Display for Bignum {
    /// Renders as decimal: repeatedly divide by ten, collecting remainders
    /// least-significant digit first, then reverse. Zero renders as `"0"`;
    /// no other value ever has a leading zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let ten = Bignum::from(10 as Limb);
        let mut digits = Vec::new();
        let mut n = self.clone();
        while !n.is_zero() {
            let (q, r) = n.div_rem(&ten);
            digits.push(char::from_digit(r.limb(0) as u32, 10).expect("remainder mod 10 is a digit"));
            n = q;
        }
        for d in digits.into_iter().rev() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Build a random bignum with exactly `num_digits` decimal digits (leading
/// digit non-zero), by drawing each digit from [`random_limb`] modulo ten.
/// Shared by [`super::random_prime`] and the RSA façade's public-exponent
/// search, both of which need a random decimal number of a given length.
pub(crate) fn random_decimal(num_digits: usize, rng: &mut impl Csprng) -> Bignum {
    assert!(num_digits > 0, "a decimal number must have at least one digit");
    let ten = Bignum::from(10 as Limb);
    let mut n = Bignum::zero();
    for i in 0..num_digits {
        let digit = loop {
            let d = (random_limb(rng) % 10) as Limb;
            if i > 0 || d != 0 {
                break d;
            }
        };
        n = &n * &ten;
        n += &Bignum::from(digit);
    }
    n
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_zero() {
        let n: Bignum = "0".parse().unwrap();
        assert!(n.is_zero());
        assert_eq!(n.to_string(), "0");
    }

    #[test]
    fn parse_and_render_two_to_the_32() {
        let n: Bignum = "4294967296".parse().unwrap();
        assert_eq!(n.to_string(), "4294967296");
    }

    #[test]
    fn parse_rejects_empty_and_non_digits() {
        assert_eq!("".parse::<Bignum>(), Err(InvalidDigit));
        assert_eq!("12a4".parse::<Bignum>(), Err(InvalidDigit));
    }

    #[test]
    fn parse_discards_leading_zeros() {
        let n: Bignum = "007".parse().unwrap();
        assert_eq!(n.to_string(), "7");
    }

    #[test]
    fn round_trip() {
        for s in ["0", "1", "9", "123456789012345678901234567890"] {
            let n: Bignum = s.parse().unwrap();
            assert_eq!(n.to_string(), s);
        }
    }

    #[test]
    fn multiply_known_product() {
        let a: Bignum = "123456789".parse().unwrap();
        let b: Bignum = "987654321".parse().unwrap();
        let expected: Bignum = "121932631112635269".parse().unwrap();
        assert_eq!(&a * &b, expected);
    }
}
