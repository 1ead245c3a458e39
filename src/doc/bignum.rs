//! A bignum represents a non-negative integer as a little-endian sequence
//! of base-`B` limbs, where `B = 2^W` and `W` is the limb width in bits.
//! This is exactly how you already write numbers in base ten, except each
//! "digit" ranges from `0` to `B - 1` instead of `0` to `9`, and the least
//! significant digit comes first instead of last.
//!
//! # Long division
//!
//! Every division in this crate — and by extension every modular
//! reduction, [modular exponentiation](crate::modpow), and
//! [modular inverse](crate::inverse) — bottoms out in one routine: bit-level
//! long division. It works the same way you divided by hand in school,
//! except in base two instead of base ten, which makes the "how many times
//! does the divisor go into the running remainder" question trivial — the
//! answer is always zero or one.
//!
//! Walking the dividend from its most significant bit down to its least
//! significant bit, a running remainder is built up one bit at a time: it
//! is doubled (a left shift), the next bit of the dividend is folded into
//! its bottom, and if the divisor now fits into it, the divisor is
//! subtracted out and a one is recorded in the corresponding bit of the
//! quotient. After all of the dividend's bits have been consumed this way,
//! the running remainder is, by construction, the true remainder, and the
//! quotient bits recorded along the way form the true quotient.
//!
//! This is quadratic in the number of bits of the dividend, which is fine
//! at the few-hundred-digit sizes RSA keys live at, and it is the only
//! division algorithm this crate implements — every other operation that
//! needs a remainder or a quotient is a thin wrapper around it.
