//! Standalone prime search functions over integer intervals, together with the
//! [SearchPrime] implementations backing them.

use crate::primality::{is_prime_miller_rabin, is_prime_trial_division};
use crate::traits::{PrimalityTestConfig, SearchPrime, Strategy};
use rand::{thread_rng, Rng};

/// Sentinel returned by [extract_largest_prime] and [extract_smallest_prime] when
/// the interval contains no prime. Note that the sentinel is not distinguishable
/// from a negative bound by type alone; prefer the `find_*` functions in new code.
pub const INVALID_PRIME: i64 = -1;

#[inline]
fn accepts<R: Rng>(n: i64, strategy: Strategy, config: &PrimalityTestConfig, rng: &mut R) -> bool {
    match strategy {
        Strategy::Deterministic => is_prime_trial_division(n),
        Strategy::Probabilistic => is_prime_miller_rabin(n, config.sprp_random_trials, rng),
    }
}

macro_rules! impl_searchprime_prim {
    ($($T:ty)*) => {$(
        impl<R: Rng> SearchPrime<$T> for R {
            fn find_largest_prime(
                &mut self,
                limit_a: $T,
                limit_b: $T,
                strategy: Strategy,
                config: Option<PrimalityTestConfig>,
            ) -> Option<$T> {
                let (low, high) = if limit_a <= limit_b {
                    (limit_a, limit_b)
                } else {
                    (limit_b, limit_a)
                };

                let config = config.unwrap_or_default();
                for n in (low..=high).rev() {
                    if accepts(n as i64, strategy, &config, self) {
                        return Some(n);
                    }
                }
                None
            }

            fn find_smallest_prime(
                &mut self,
                limit_a: $T,
                limit_b: $T,
                strategy: Strategy,
                config: Option<PrimalityTestConfig>,
            ) -> Option<$T> {
                let (low, high) = if limit_a <= limit_b {
                    (limit_a, limit_b)
                } else {
                    (limit_b, limit_a)
                };

                let config = config.unwrap_or_default();
                for n in low..=high {
                    if accepts(n as i64, strategy, &config, self) {
                        return Some(n);
                    }
                }
                None
            }
        }
    )*}
}
impl_searchprime_prim!(i32 i64);

/// Find the largest prime between `limit_a` and `limit_b` (both inclusive, accepted
/// in either order), walking the interval downwards from the larger bound.
///
/// The scan visits one candidate at a time, so the cost is proportional to the
/// interval length times the per-candidate test; wide intervals can take long.
pub fn find_largest_prime(limit_a: i64, limit_b: i64, strategy: Strategy) -> Option<i64> {
    thread_rng().find_largest_prime(limit_a, limit_b, strategy, None)
}

/// Find the smallest prime between `limit_a` and `limit_b` (both inclusive, accepted
/// in either order), walking the interval upwards from the smaller bound.
pub fn find_smallest_prime(limit_a: i64, limit_b: i64, strategy: Strategy) -> Option<i64> {
    thread_rng().find_smallest_prime(limit_a, limit_b, strategy, None)
}

/// Same as [find_largest_prime], returning [INVALID_PRIME] instead of `None` when
/// the interval is exhausted without a hit.
pub fn extract_largest_prime(limit_a: i64, limit_b: i64, strategy: Strategy) -> i64 {
    find_largest_prime(limit_a, limit_b, strategy).unwrap_or(INVALID_PRIME)
}

/// Same as [find_smallest_prime], returning [INVALID_PRIME] instead of `None` when
/// the interval is exhausted without a hit.
pub fn extract_smallest_prime(limit_a: i64, limit_b: i64, strategy: Strategy) -> i64 {
    find_smallest_prime(limit_a, limit_b, strategy).unwrap_or(INVALID_PRIME)
}
