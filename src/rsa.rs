//! The RSA façade: key generation and the two modular-exponentiation
//! wrappers conventionally called "encode" and "decode".
//!
//! Everything here is a thin shell over [`modpow`](crate::bignum::modpow) —
//! the hard part of this crate lives entirely in [`crate::bignum`]. Key
//! generation is "two random primes, compute `n`, `phi`, `e`, `d`"; encoding
//! and decoding are both `modpow`.

use crate::{
    bignum::{self, gcd, inverse, modpow, random_prime, Bignum, DivideByZero, Limb},
    random::Csprng,
};

/// An RSA public key: exponent `e` and modulus `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: Bignum,
    pub n: Bignum,
}

/// An RSA private key: exponent `d` and modulus `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: Bignum,
    pub n: Bignum,
}

/// Generate an RSA keypair from two random `num_digits`-digit probable
/// primes `p` and `q`: `n := p * q`, `phi := (p - 1) * (q - 1)`, a public
/// exponent `e` found by [`random_exponent`], and `d := e^-1 mod phi`.
///
/// `random_exponent` only ever returns a value already known to be coprime
/// to `phi`, so the `inverse` call below cannot fail in practice; it is
/// still spelled with `expect` rather than silently discarding the
/// `Result`, so a violation of that invariant surfaces loudly instead of
/// producing a bad key.
pub fn generate_keypair(num_digits: usize, rng: &mut impl Csprng) -> (PublicKey, PrivateKey) {
    let p = random_prime(num_digits, rng);
    let q = random_prime(num_digits, rng);
    let n = &p * &q;
    let one = Bignum::from(1 as Limb);
    let phi = &(&p - &one) * &(&q - &one);
    let e = random_exponent(&phi, rng);
    let d = inverse(&e, &phi).expect("random_exponent only returns values coprime to phi");
    (PublicKey { e, n: n.clone() }, PrivateKey { d, n })
}

/// Search for a random public exponent `e` with `1 < e < phi` and
/// `gcd(e, phi) == 1`, by drawing random decimal numbers as wide as `phi`,
/// reducing modulo `phi`, and rejecting the draw until it lands both in
/// range and coprime.
///
/// Grounded on the original header's `randExponent(phi, n, result)`
/// ("choose a random public key exponent... less than the modulus...
/// coprime to phi"), reusing the same digit-string generator
/// [`random_prime`] draws from.
pub fn random_exponent(phi: &Bignum, rng: &mut impl Csprng) -> Bignum {
    let one = Bignum::from(1 as Limb);
    let digits = phi.to_string().len();
    loop {
        let draw = bignum::random_decimal(digits, rng);
        let e = draw.div_rem(phi).1;
        if e > one && gcd(&e, phi) == one {
            return e;
        }
    }
}

/// Encode (encrypt) the message `m` under the public key: `m^e mod n`.
/// Fails with [`DivideByZero`] only if `key.n` is zero, which cannot arise
/// from a key produced by [`generate_keypair`].
pub fn encode(m: &Bignum, key: &PublicKey) -> Result<Bignum, DivideByZero> {
    modpow(m, &key.e, &key.n)
}

/// Decode (decrypt) the ciphertext `c` under the private key: `c^d mod n`.
pub fn decode(c: &Bignum, key: &PrivateKey) -> Result<Bignum, DivideByZero> {
    modpow(c, &key.d, &key.n)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_decode_round_trips_with_textbook_keys() {
        // p = 61, q = 53, n = 3233, phi = 3120, e = 17, d = 2753.
        let public = PublicKey {
            e: Bignum::from(17 as Limb),
            n: Bignum::from(3233 as Limb),
        };
        let private = PrivateKey {
            d: Bignum::from(2753 as Limb),
            n: Bignum::from(3233 as Limb),
        };
        let m = Bignum::from(65 as Limb);
        let c = encode(&m, &public).unwrap();
        assert_eq!(c, Bignum::from(2790 as Limb));
        assert_eq!(decode(&c, &private).unwrap(), m);
    }

    #[test]
    fn d_is_the_inverse_of_e_modulo_phi() {
        let e = Bignum::from(17 as Limb);
        let phi = Bignum::from(3120 as Limb);
        let d = inverse(&e, &phi).unwrap();
        assert_eq!(d, Bignum::from(2753 as Limb));
    }
}
