//! Literate background reading for the two hardest pieces of this crate:
//! the long-division algorithm the multiplicative core is built on, and why
//! RSA encode/decode actually invert each other.

pub mod bignum;
pub mod rsa;
