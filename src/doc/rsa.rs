//! RSA key generation picks two primes `p` and `q`, computes `n = p * q`
//! and `phi = (p - 1) * (q - 1)`, then picks a public exponent `e` coprime
//! to `phi` and its modular inverse `d = e^-1 mod phi`. Encoding a message
//! is `m^e mod n`; decoding a ciphertext is `c^d mod n`.
//!
//! The reason decoding undoes encoding comes down to one fact from number
//! theory: because `d` was chosen so that `e * d ≡ 1 (mod phi)`, there is
//! some integer `k` with `e * d = 1 + k * phi`. Euler's theorem says that
//! for any `m` coprime to `n`, `m^phi ≡ 1 (mod n)` — so
//!
//! ```text
//! (m^e)^d mod n = m^(e*d) mod n = m^(1 + k*phi) mod n = m * (m^phi)^k mod n = m mod n
//! ```
//!
//! which is exactly `decode(encode(m, e, n), d, n) == m mod n` for any
//! message smaller than `n`. None of this requires `m` and `n` to actually
//! be coprime in practice — the Carmichael/Euler argument extends to cover
//! the (extremely unlikely, for random primes) case where `m` happens to
//! share a factor with `n` — but the clean derivation above is the one
//! worth carrying in your head.
//!
//! This crate's [`crate::generate_keypair`] is the textbook version of the
//! above: it makes no attempt at constant-time arithmetic or padding
//! schemes such as OAEP, and messages must already be smaller than `n` —
//! blocking a longer message into several such pieces is left to the
//! caller.
