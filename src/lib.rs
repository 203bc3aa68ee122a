mod primality;
mod range;
mod traits;

pub use primality::{check_prime, is_prime};
pub use range::{
    extract_largest_prime, extract_smallest_prime, find_largest_prime, find_smallest_prime,
    INVALID_PRIME,
};
pub use traits::{Primality, PrimalityTestConfig, PrimalityUtils, SearchPrime, Strategy};

pub mod detail {
    pub use super::primality::{is_prime_miller_rabin, is_prime_trial_division};
}
