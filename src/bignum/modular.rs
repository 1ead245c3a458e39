//! The modular layer: modular exponentiation, greatest common divisor, and
//! the extended-Euclidean modular inverse. Everything here is built out of
//! [`super::muldiv`]'s division.

use {
    super::{muldiv::DivideByZero, Bignum, Limb},
    std::fmt,
};

/// Raised by [`inverse`] when `gcd(a, m) != 1`, i.e. `a` has no inverse
/// modulo `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotInvertible;

impl fmt::Display for NotInvertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value has no inverse modulo the given modulus")
    }
}

impl std::error::Error for NotInvertible {}

/// `base^exp mod modulus`, by right-to-left square-and-multiply. Fails with
/// [`DivideByZero`] if `modulus` is zero.
///
/// ```text
/// r := 1
/// b := base mod modulus
/// for each bit of exp, least to most significant:
///     if the bit is set: r := (r * b) mod modulus
///     b := (b * b) mod modulus
/// ```
///
/// Reducing after every multiplication keeps every intermediate value
/// smaller than `modulus`, bounding the operand size the multiplicative
/// core ever has to deal with regardless of how large `exp` is.
pub fn modpow(base: &Bignum, exp: &Bignum, modulus: &Bignum) -> Result<Bignum, DivideByZero> {
    if modulus.is_zero() {
        return Err(DivideByZero);
    }
    if *modulus == Bignum::from(1 as Limb) {
        return Ok(Bignum::zero());
    }
    let mut result = Bignum::from(1 as Limb);
    let mut b = base.div_rem(modulus).1;
    for i in 0..exp.bits() {
        if exp.bit(i) {
            result = (&result * &b).div_rem(modulus).1;
        }
        b = (&b * &b).div_rem(modulus).1;
    }
    Ok(result)
}

/// The greatest common divisor of `a` and `b`, by the classical Euclidean
/// algorithm: repeatedly replace `(a, b)` with `(b, a mod b)` until `b`
/// reaches zero. `a < b` is handled automatically — the first step's
/// modulus naturally swaps the pair.
pub fn gcd(a: &Bignum, b: &Bignum) -> Bignum {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a.div_rem(&b).1;
        a = b;
        b = r;
    }
    a
}

/// The inverse of `a` modulo `m`, i.e. the unique `x` in `[0, m)` with
/// `a * x ≡ 1 (mod m)`. Fails with [`NotInvertible`] if `gcd(a, m) != 1`.
///
/// Runs the extended Euclidean algorithm on two pairs of bignums, `(g0,
/// g1)` (the remainder sequence, starting at `(m, a)`) and `(x0, x1)` (the
/// Bézout coefficients of `a`, starting at `(0, 1)`). Every value involved
/// stays non-negative throughout — there is no signed bignum type in this
/// crate — by adding `m` back in before a subtraction that would otherwise
/// underflow, exactly as the extended Euclidean step `x0 - q * x1` is kept
/// non-negative by computing it modulo `m`.
pub fn inverse(a: &Bignum, m: &Bignum) -> Result<Bignum, NotInvertible> {
    let (mut g0, mut g1) = (m.clone(), a.clone());
    let (mut x0, mut x1) = (Bignum::zero(), Bignum::from(1 as Limb));
    while !g1.is_zero() {
        let (q, r) = g0.div_rem(&g1);
        let x2 = sub_mod(&x0, &(&q * &x1), m);
        g0 = g1;
        g1 = r;
        x0 = x1;
        x1 = x2;
    }
    if g0 == Bignum::from(1 as Limb) {
        Ok(x0)
    } else {
        Err(NotInvertible)
    }
}

/// `(a - b) mod m`, where `a` and `b` are ordinary non-negative bignums that
/// may not be reduced below `m`. Adds `m` back in before subtracting when
/// `b` would otherwise be larger than `a`, then reduces the result, so the
/// subtraction never has to produce a negative value.
fn sub_mod(a: &Bignum, b: &Bignum, m: &Bignum) -> Bignum {
    let b = b.div_rem(m).1;
    let diff = match a.checked_sub(&b) {
        Ok(diff) => diff,
        Err(_) => &(m + a) - &b,
    };
    diff.div_rem(m).1
}
