use crate::traits::{Primality, PrimalityTestConfig, PrimalityUtils, Strategy};
use num_integer::Roots;
use num_modular::{ModularCoreOps, ModularPow};
use rand::Rng;
use std::convert::TryInto;

macro_rules! impl_primalityutils_prim {
    ($($T:ty)*) => {$(
        impl PrimalityUtils for $T {
            fn is_sprp(&self, base: $T) -> bool {
                if *self < 2 {
                    return false;
                }

                // find 2^shift*u + 1 = n
                let tm1 = self - 1;
                let shift = tm1.trailing_zeros();
                let u = tm1 >> shift;

                let mut x = base.powm(u, self);
                if x == 1 || x == tm1 {
                    return true;
                }

                for _ in 1..shift {
                    x = x.mulm(x, self);
                    if x == tm1 {
                        return true;
                    }
                }

                false
            }
        }
    )*}
}
impl_primalityutils_prim!(u8 u16 u32 u64);

/// Deterministic primality test by trial division with the 6k±1 wheel.
///
/// The sign of `n` is taken as-is, so zero, one and every negative integer are
/// rejected up front.
pub fn is_prime_trial_division(n: i64) -> bool {
    if n <= 1 {
        return false;
    } else if n <= 3 {
        return true;
    } else if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // candidate divisors 6k-1 and 6k+1, up to the integer square root
    let limit = n.sqrt();
    let mut j = 5;
    while j <= limit {
        if n % j == 0 || n % (j + 2) == 0 {
            return false;
        }
        j += 6;
    }

    true
}

/// Miller-Rabin primality test with `trials` rounds, drawing a uniformly random
/// base in `[1, n-2]` from `rng` for each round.
///
/// A prime input passes every round, so false negatives are impossible; a
/// composite survives all rounds with probability at most 4^-trials. Passing a
/// seeded generator makes the outcome reproducible.
pub fn is_prime_miller_rabin<R: Rng>(n: i64, trials: usize, rng: &mut R) -> bool {
    // zero, one and negative integers reach no accepting branch
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as u64;
    for _ in 0..trials {
        let base = rng.gen_range(1..=n - 2);
        if !n.is_sprp(base) {
            return false;
        }
    }
    true
}

/// Test the primality of `n` under the selected strategy.
///
/// The deterministic strategy answers [Primality::Yes] or [Primality::No]; the
/// probabilistic one answers [Primality::No] or [Primality::Probable] carrying
/// the confidence of the configured round count.
pub fn check_prime(n: i64, strategy: Strategy, config: Option<PrimalityTestConfig>) -> Primality {
    match strategy {
        Strategy::Deterministic => match is_prime_trial_division(n) {
            true => Primality::Yes,
            false => Primality::No,
        },
        Strategy::Probabilistic => {
            let config = config.unwrap_or_default();
            let mut rng = rand::thread_rng();
            if is_prime_miller_rabin(n, config.sprp_random_trials, &mut rng) {
                let trials: i32 = config.sprp_random_trials.try_into().unwrap();
                Primality::Probable(1. - 0.25_f32.powi(trials))
            } else {
                Primality::No
            }
        }
    }
}

/// Test if `n` is prime under the selected strategy with the default configuration.
pub fn is_prime(n: i64, strategy: Strategy) -> bool {
    check_prime(n, strategy, None).probably()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const PRIME100: [i64; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];

    #[test]
    fn trial_division_test() {
        for x in 0..100 {
            assert_eq!(PRIME100.contains(&x), is_prime_trial_division(x));
        }

        // the sign is not stripped, so no negative number is prime
        assert!(!is_prime_trial_division(-5));
        for x in -100..=1 {
            assert!(!is_prime_trial_division(x));
        }

        // some larger primes and composites
        assert!(is_prime_trial_division(2147483647)); // 2^31 - 1
        assert!(is_prime_trial_division(6469693333));
        assert!(!is_prime_trial_division(4294967297)); // 641 * 6700417
        assert!(!is_prime_trial_division(25));
        assert!(!is_prime_trial_division(10967535067)); // 104723 * 104729
    }

    #[test]
    fn sprp_test() {
        // strong pseudoprimes of base 2 (OEIS A001262) under 10000
        let spsp: [u16; 5] = [2047, 3277, 4033, 4681, 8321];
        for psp in spsp {
            assert!(psp.is_sprp(2));
            assert!(!is_prime_trial_division(psp as i64));
        }

        // prime inputs pass for every base
        for p in [61u64, 104729, 2147483647] {
            for base in [2u64, 3, 5, 7] {
                assert!(p.is_sprp(base), "sprp test on {} with base {}", p, base);
            }
        }
    }

    #[test]
    fn miller_rabin_test() {
        let mut rng = StdRng::seed_from_u64(2047);
        for x in 0..100 {
            assert_eq!(
                PRIME100.contains(&x),
                is_prime_miller_rabin(x, 24, &mut rng),
                "miller-rabin on {}",
                x
            );
        }
        for x in -100..=1 {
            assert!(!is_prime_miller_rabin(x, 24, &mut rng));
        }
        assert!(is_prime_miller_rabin(2147483647, 24, &mut rng));
    }

    #[test]
    fn strategy_agreement_test() {
        // both strategies settle on the classical answer for every integer
        let config = Some(PrimalityTestConfig::strict());
        for n in -1000..10000 {
            let det = check_prime(n, Strategy::Deterministic, config).probably();
            let prob = check_prime(n, Strategy::Probabilistic, config).probably();
            assert_eq!(det, prob, "strategy disagreement on {}", n);
        }
    }

    #[test]
    fn check_prime_test() {
        assert!(matches!(
            check_prime(11, Strategy::Deterministic, None),
            Primality::Yes
        ));
        assert!(matches!(
            check_prime(12, Strategy::Deterministic, None),
            Primality::No
        ));
        assert!(matches!(
            check_prime(11, Strategy::Probabilistic, None),
            Primality::Probable(_)
        ));
        assert!(matches!(
            check_prime(-7, Strategy::Probabilistic, None),
            Primality::No
        ));

        match check_prime(104729, Strategy::Probabilistic, None) {
            Primality::Probable(p) => assert!(p > 0.99),
            _ => panic!("104729 should be probably prime"),
        }
    }

    #[test]
    fn is_prime_test() {
        assert!(is_prime(2147483647, Strategy::Deterministic));
        assert!(!is_prime(-5, Strategy::Deterministic));
        assert!(!is_prime(-5, Strategy::Probabilistic));
        assert!(is_prime(97, Strategy::Probabilistic));
    }
}
