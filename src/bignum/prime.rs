//! The number-theoretic layer: the Jacobi symbol, the Solovay–Strassen
//! primality witness built from it, and random prime search.

use {
    super::{modular::modpow, Bignum, Limb},
    crate::random::{random_limb, Csprng},
};

/// The Jacobi symbol `J(a, n)` for odd positive `n`, as `-1`, `0`, or `+1`.
///
/// Copies `a` and `n` into local working bignums rather than mutating the
/// caller's, even though the textbook recursion this implements is usually
/// described (and was originally implemented) destructively — the
/// computation is logically pure.
///
/// Implemented iteratively rather than recursively, applying the standard
/// steps each round: reduce `a` modulo `n`; factor `a = 2^e * a1` with `a1`
/// odd; fold in a sign flip when `e` is odd and `n mod 8` is `3` or `5`;
/// fold in another sign flip under quadratic reciprocity when both `a1` and
/// `n` are `3 mod 4`; then recurse on `(n mod a1, a1)`.
pub fn jacobi(a: &Bignum, n: &Bignum) -> i8 {
    let mut a = a.div_rem(n).1;
    let mut n = n.clone();
    let mut s: i8 = 1;
    loop {
        // The modulus reaching 1 is the recursion's other base case, not just
        // `a` reaching 0 or 1: once `a1` (the odd part peeled off below)
        // becomes 1, the next round recurses on `(n mod 1, 1) = (0, 1)`,
        // which would otherwise fall into the `a.is_zero()` case below and
        // report 0 instead of the accumulated sign.
        if n == Bignum::from(1 as Limb) {
            return s;
        }
        if a.is_zero() {
            return 0;
        }
        if a == Bignum::from(1 as Limb) {
            return s;
        }
        let mut e = 0u32;
        while !a.bit(0) {
            a.shr1();
            e += 1;
        }
        if e % 2 == 1 {
            match mod_small(&n, 8) {
                1 | 7 => {}
                _ => s = -s,
            }
        }
        if mod_small(&a, 4) == 3 && mod_small(&n, 4) == 3 {
            s = -s;
        }
        let next_a = n.div_rem(&a).1;
        n = a;
        a = next_a;
    }
}

/// `b mod d` as a small integer, for a divisor `d` known to be tiny (4 or
/// 8) so the remainder always fits in one limb regardless of limb width.
fn mod_small(b: &Bignum, d: Limb) -> Limb {
    b.div_rem(&Bignum::from(d)).1.limb(0)
}

/// True iff `a` is not a Euler witness against `n`'s primality: the Jacobi
/// symbol `J(a, n)` (taking `-1` as `n - 1`) agrees with `a^((n-1)/2) mod
/// n`, and neither is zero. False means `a` proves `n` composite.
fn solovay_witness(a: Limb, n: &Bignum) -> bool {
    let a_big = Bignum::from(a);
    let j = jacobi(&a_big, n);
    if j == 0 {
        return false;
    }
    let one = Bignum::from(1 as Limb);
    let x = if j == 1 { one.clone() } else { n - &one };
    let exp = (n - &one).div_rem(&Bignum::from(2 as Limb)).0;
    let y = modpow(&a_big, &exp, n).expect("n is odd and > 2 inside probably_prime");
    x == y && !x.is_zero()
}

/// Test whether `n` is probably prime by running `rounds` independent
/// Solovay–Strassen checks with small random witnesses in `[2, 254]`.
/// Returns `false` as soon as any round fails. The false-positive
/// probability is at most `2^-rounds`.
pub fn probably_prime(n: &Bignum, rounds: u32, rng: &mut impl Csprng) -> bool {
    let one = Bignum::from(1 as Limb);
    if *n <= one {
        return false;
    }
    if *n == Bignum::from(2 as Limb) {
        return true;
    }
    if !n.bit(0) {
        return false;
    }
    for _ in 0..rounds {
        let a = 2 + (random_limb(rng) % 253) as Limb;
        if !solovay_witness(a, n) {
            return false;
        }
    }
    true
}

/// Generate a random probable prime with `num_digits` decimal digits.
///
/// Generates a random decimal digit string of the requested length (with a
/// non-zero leading digit), parses it, forces it odd, then searches upward
/// by adding two until [`probably_prime`] accepts.
pub fn random_prime(num_digits: usize, rng: &mut impl Csprng) -> Bignum {
    let mut candidate = super::random_decimal(num_digits, rng);
    candidate.set_bit(0);
    let two = Bignum::from(2 as Limb);
    while !probably_prime(&candidate, 20, rng) {
        candidate += &two;
    }
    candidate
}

#[cfg(test)]
mod test {
    use {super::*, crate::test::support::CyclingCsprng};

    #[test]
    fn jacobi_of_one_is_one() {
        let n = Bignum::from(7 as Limb);
        assert_eq!(jacobi(&Bignum::from(1 as Limb), &n), 1);
    }

    #[test]
    fn jacobi_is_multiplicative() {
        let n = Bignum::from(9 as Limb);
        let a = Bignum::from(5 as Limb);
        let b = Bignum::from(8 as Limb);
        let ab = &a * &b;
        let (ja, jb, jab) = (jacobi(&a, &n), jacobi(&b, &n), jacobi(&ab, &n));
        assert_ne!(ja, 0, "a is coprime to n, J(a, n) must not be 0");
        assert_ne!(jb, 0, "b is coprime to n, J(b, n) must not be 0");
        assert_ne!(jab, 0, "a*b is coprime to n, J(a*b, n) must not be 0");
        assert_eq!(jab, ja * jb);
    }

    #[test]
    fn jacobi_matches_eulers_criterion_for_a_prime() {
        // For a prime p and 1 <= a < p, J(a, p) == a^((p-1)/2) mod p.
        let p = Bignum::from(13 as Limb);
        for a in 1..13u32 {
            let a = Bignum::from(a as Limb);
            let j = jacobi(&a, &p);
            assert_ne!(j, 0, "a is coprime to prime p, J(a, p) must not be 0");
            let exp = (&p - &Bignum::from(1 as Limb)).div_rem(&Bignum::from(2 as Limb)).0;
            let euler = modpow(&a, &exp, &p).unwrap();
            let expected = if j == 1 {
                Bignum::from(1 as Limb)
            } else {
                &p - &Bignum::from(1 as Limb)
            };
            assert_eq!(euler, expected, "mismatch for a = {a:?}");
        }
    }

    #[test]
    fn probably_prime_accepts_small_primes() {
        let mut rng = CyclingCsprng::new(&[0xAB, 0x47, 0x11, 0xC3, 0x9E]);
        for p in [2u32, 3, 5, 7, 11, 13, 9973] {
            assert!(
                probably_prime(&Bignum::from(p as Limb), 20, &mut rng),
                "{p} should be prime"
            );
        }
    }

    #[test]
    fn probably_prime_rejects_carmichael_number() {
        // 561 = 3 * 11 * 17 is the smallest Carmichael number.
        let mut rng = CyclingCsprng::new(&[0xAB, 0x47, 0x11, 0xC3, 0x9E]);
        assert!(!probably_prime(&Bignum::from(561 as Limb), 20, &mut rng));
    }

    #[test]
    fn probably_prime_rejects_small_composites() {
        let mut rng = CyclingCsprng::new(&[0x01, 0x02, 0x03, 0x04]);
        for c in [4u32, 6, 8, 9, 10, 15, 21, 25] {
            assert!(!probably_prime(&Bignum::from(c as Limb), 20, &mut rng));
        }
    }

    /// Sieve of Eratosthenes over `[0, limit)`, returning the primes in that
    /// range. Used to sweep `probably_prime` against every prime below 10^5,
    /// as spec.md's primality-soundness property calls for, rather than a
    /// hand-picked handful.
    fn sieve_primes(limit: u32) -> Vec<u32> {
        let mut is_composite = vec![false; limit as usize];
        let mut primes = Vec::new();
        for n in 2..limit {
            if !is_composite[n as usize] {
                primes.push(n);
                let mut m = n as u64 * n as u64;
                while m < limit as u64 {
                    is_composite[m as usize] = true;
                    m += n as u64;
                }
            }
        }
        primes
    }

    #[test]
    fn probably_prime_accepts_every_prime_below_1e5() {
        let mut rng = CyclingCsprng::new(&[0xAB, 0x47, 0x11, 0xC3, 0x9E, 0x2D, 0x6F]);
        for p in sieve_primes(100_000) {
            assert!(
                probably_prime(&Bignum::from(p as Limb), 20, &mut rng),
                "{p} should be prime"
            );
        }
    }

    #[test]
    fn probably_prime_rejects_every_carmichael_number_below_1e5() {
        // All Carmichael numbers below 10^5 (OEIS A002997).
        const CARMICHAEL: [u32; 16] = [
            561, 1105, 1729, 2465, 2821, 6601, 8911, 10585, 15841, 29341, 41041, 46657, 52633,
            62745, 63973, 75361,
        ];
        let mut rng = CyclingCsprng::new(&[0xAB, 0x47, 0x11, 0xC3, 0x9E, 0x2D, 0x6F]);
        for n in CARMICHAEL {
            assert!(
                !probably_prime(&Bignum::from(n as Limb), 20, &mut rng),
                "{n} is a Carmichael number and should be rejected"
            );
        }
    }
}
