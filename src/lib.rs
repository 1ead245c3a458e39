#![feature(return_position_impl_trait_in_trait)]

#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod bignum;
mod random;
mod rsa;

pub use {
    bignum::{
        gcd,
        inverse,
        jacobi,
        modpow,
        probably_prime,
        random_prime,
        Bignum,
        DivideByZero,
        DoubleLimb,
        InvalidDigit,
        Limb,
        NotInvertible,
        Underflow,
    },
    random::Csprng,
    rsa::{decode, encode, generate_keypair, random_exponent, PrivateKey, PublicKey},
};
