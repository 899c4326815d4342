//! Integer arithmetic.
//!
//! Sums and products widen to `i128`, which holds every result of two
//! `i64` operands, so `add` and `multiply` never fail.

use crate::{Error, Result};

/// Adds two integers.
///
/// # Examples
///
/// ```
/// assert_eq!(kata_core::add(2, 3), 5);
/// assert_eq!(kata_core::add(-1, 1), 0);
/// ```
#[must_use]
pub fn add(a: i64, b: i64) -> i128 {
    i128::from(a) + i128::from(b)
}

/// Multiplies two integers.
///
/// # Examples
///
/// ```
/// assert_eq!(kata_core::multiply(3, 4), 12);
/// assert_eq!(kata_core::multiply(0, 5), 0);
/// ```
#[must_use]
pub fn multiply(a: i64, b: i64) -> i128 {
    i128::from(a) * i128::from(b)
}

/// True iff `n` is exactly divisible by 2. Zero and negative evens count.
#[must_use]
pub const fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Computes `n!`.
///
/// `0!` and `1!` are both 1.
///
/// # Errors
///
/// - [`Error::NegativeFactorial`] when `n < 0`
/// - [`Error::Overflow`] when the product exceeds `u128` (from `35!` on)
pub fn factorial(n: i64) -> Result<u128> {
    let upper = u128::try_from(n).map_err(|_| Error::NegativeFactorial { n })?;

    (1..=upper).try_fold(1_u128, |acc, k| {
        acc.checked_mul(k).ok_or_else(|| Error::Overflow {
            operation: "factorial",
            detail: format!("{n}! does not fit in 128 bits"),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-1, 1), 0);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn test_add_does_not_overflow_at_bounds() {
        assert_eq!(add(i64::MAX, 1), i128::from(i64::MAX) + 1);
        assert_eq!(add(i64::MIN, -1), i128::from(i64::MIN) - 1);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(3, 4), 12);
        assert_eq!(multiply(0, 5), 0);
        assert_eq!(multiply(-2, 3), -6);
    }

    #[test]
    fn test_multiply_extremes() {
        let expected = i128::from(i64::MIN) * i128::from(i64::MIN);
        assert_eq!(multiply(i64::MIN, i64::MIN), expected);
    }

    #[test]
    fn test_is_even() {
        assert!(is_even(4));
        assert!(is_even(0));
        assert!(is_even(-2));
        assert!(!is_even(3));
        assert!(!is_even(7));
        assert!(!is_even(-5));
        assert!(is_even(i64::MIN));
        assert!(!is_even(i64::MAX));
    }

    #[test]
    fn test_factorial_small_values() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(3), Ok(6));
        assert_eq!(factorial(5), Ok(120));
    }

    #[test]
    fn test_factorial_largest_representable() {
        // 34! = 295232799039604140847618609643520000000
        assert_eq!(
            factorial(34),
            Ok(295_232_799_039_604_140_847_618_609_643_520_000_000)
        );
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(matches!(factorial(35), Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_factorial_negative_is_error() {
        assert_eq!(factorial(-1), Err(Error::NegativeFactorial { n: -1 }));
        assert_eq!(
            factorial(i64::MIN),
            Err(Error::NegativeFactorial { n: i64::MIN })
        );
    }
}
