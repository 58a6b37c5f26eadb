//! Miller–Rabin probable-prime test
//!
//! The test first settles small inputs and inputs with a factor below 100
//! by trial division. The remaining odd `n` is written as `n - 1 = 2^s * d`
//! and each trial draws a witness `a` uniformly from `[2, n - 2]`:
//! `n` passes the trial if `a^d ≡ 1` or `a^(2^r * d) ≡ n - 1 (mod n)` for
//! some `r < s`.
//!
//! A composite number passes a single trial with probability at most 1/4,
//! so `k` passed trials bound the error by `4^-k`. A `false` result is
//! always correct.

use crate::primitives::Uint;
use crate::rng::UniformDistribution;

use rand_core::RngCore;

/// Number of trials used by [`MillerRabin::default`].
pub const DEFAULT_TRIALS: u32 = 25;

const SMALL_PRIME_LIMIT: usize = 100;

const fn small_prime_count() -> usize {
    let mut count = 0;
    let mut n = 2;
    while n < SMALL_PRIME_LIMIT {
        if is_small_prime(n) {
            count += 1;
        }
        n += 1;
    }
    count
}

const fn is_small_prime(n: usize) -> bool {
    let mut p = 2;
    while p * p <= n {
        if n % p == 0 {
            return false;
        }
        p += 1;
    }
    n >= 2
}

const fn small_primes() -> [u64; small_prime_count()] {
    let mut table = [0u64; small_prime_count()];
    let mut i = 0;
    let mut n = 2;
    while n < SMALL_PRIME_LIMIT {
        if is_small_prime(n) {
            table[i] = n as u64;
            i += 1;
        }
        n += 1;
    }
    table
}

/// The primes below 100, used for trial division.
pub const SMALL_PRIMES: [u64; small_prime_count()] = small_primes();

/// Miller–Rabin test parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MillerRabin {
    /// Number of random witnesses tried before declaring `n` probably prime.
    pub trials: u32,
}

impl MillerRabin {
    /// Creates a test running `trials` rounds.
    pub const fn new(trials: u32) -> Self {
        Self { trials }
    }

    /// Returns `false` if `n` is certainly composite (or below 2) and `true`
    /// if `n` is probably prime.
    ///
    /// Witnesses are drawn from `rng`, so the answer for a given `n` is
    /// reproducible for a given engine state.
    pub fn is_probable_prime<const LIMBS: usize, R: RngCore + ?Sized>(
        &self,
        n: &Uint<LIMBS>,
        rng: &mut R,
    ) -> bool {
        if *n < 2u64 {
            return false;
        }

        for &p in SMALL_PRIMES.iter() {
            if *n == p {
                return true;
            }

            if n.div_rem_limb_nonzero(p).1 == 0 {
                log::debug!("{n} has the small factor {p}");
                return false;
            }
        }

        // Here n > 100: the witness range is never empty and n is a valid
        // modulus.
        let n_minus_one = *n - 1u64;
        let s = n_minus_one.trailing_zeros();
        let d = n_minus_one >> s;

        let witnesses = UniformDistribution::between(Uint::from_u64(2), *n - 2u64);

        'trials: for trial in 0..self.trials {
            let a = witnesses.sample(rng);
            let mut x = a.modpow_nonzero(&d, n);

            if x == 1u64 || x == n_minus_one {
                continue;
            }

            for _ in 1..s {
                x = x.mul_mod_nonzero(&x, n);

                if x == n_minus_one {
                    continue 'trials;
                }
                if x == 1u64 {
                    break;
                }
            }

            log::debug!("witness {a} proves {n} composite in trial {trial}");
            return false;
        }

        log::debug!("{n} is probably prime after {} trials", self.trials);
        true
    }
}

impl Default for MillerRabin {
    fn default() -> Self {
        Self::new(DEFAULT_TRIALS)
    }
}
