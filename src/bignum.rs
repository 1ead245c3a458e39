//! Arbitrary-precision unsigned integers and the arithmetic built on top of
//! them.
//!
//! [`Bignum`] is the only first-class type: a non-negative integer in base
//! `B = 2^W` (see [`Limb`]). Every other item here is layered strictly on
//! top of the ones below it — comparison on the limb store, the additive
//! core on comparison, the multiplicative core on the additive core, the
//! modular layer on division, and the number-theoretic layer (Jacobi
//! symbol, Solovay–Strassen primality, random prime search) on the modular
//! layer.

mod arith;
mod cmp;
mod decimal;
mod limb;
mod modular;
mod muldiv;
mod prime;

pub use {
    arith::Underflow,
    decimal::InvalidDigit,
    limb::{Bignum, DoubleLimb, Limb},
    modular::{gcd, inverse, modpow, NotInvertible},
    muldiv::DivideByZero,
    prime::{jacobi, probably_prime, random_prime},
};

pub(crate) use {
    decimal::random_decimal,
    limb::{LIMB_BITS, LIMB_BYTES},
};
