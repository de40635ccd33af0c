//! Divisible and non-divisible sums
//!
//! For `n` and `m`, `num1` is the sum of the integers in `1..=n` that are not
//! divisible by `m` and `num2` the sum of those that are. The answer is
//! `num1 - num2`, computed in closed form without iterating.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisorError {
    #[error("Divisor must be positive, got 0")]
    ZeroDivisor,
}

/// Sum of `1..=n` not divisible by `m`, minus the sum of `1..=n` divisible by `m`.
///
/// Every `u32` pair with `m > 0` fits: the largest magnitude is `n(n+1)/2`,
/// which stays below `i64::MAX`.
pub fn difference_of_sums(n: u32, m: u32) -> Result<i64, DivisorError> {
    if m == 0 {
        return Err(DivisorError::ZeroDivisor);
    }

    let (n, m) = (u64::from(n), u64::from(m));
    let total = n * (n + 1) / 2;
    let k = n / m;
    let divisible = m * (k * (k + 1) / 2);

    // Both halves are at most `total`, so each fits in i64
    let result = (total - divisible) as i64 - divisible as i64;
    debug!("difference_of_sums(n={}, m={}) = {}", n, m, result);
    Ok(result)
}
