use crate::error::{CalcError, CalcResult};

/// Raises `base` to an integer power by repeated squaring.
///
/// A negative exponent computes the reciprocal power `pow(1 / base, -exp)`.
/// `pow(0, 0)` is `1`.
///
/// # Errors
/// Returns `DivideByZero` for a zero base with a negative exponent.
///
/// # Example
/// ```
/// use tally::interpreter::math::pow;
///
/// assert_eq!(pow(2.0, 10).unwrap(), 1024.0);
/// assert_eq!(pow(2.0, -2).unwrap(), 0.25);
/// assert!(pow(0.0, -1).is_err());
/// ```
pub fn pow(base: f64, exp: i32) -> CalcResult<f64> {
    if base == 0.0 {
        return match exp.signum() {
            -1 => Err(CalcError::DivideByZero { operation: "pow" }),
            0 => Ok(1.0),
            _ => Ok(0.0),
        };
    }

    let mut factor = if exp < 0 { 1.0 / base } else { base };
    let mut remaining = exp.unsigned_abs();
    let mut result = 1.0;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= factor;
        }
        remaining >>= 1;
        factor *= factor;
    }
    Ok(result)
}

/// Computes `n!` as a double.
///
/// # Errors
/// - `NegativeFactorial` if `n` is negative.
/// - `Overflow` if the product exceeds the range of `f64` (from `171!` on).
pub fn factorial(n: i32) -> CalcResult<f64> {
    if n < 0 {
        return Err(CalcError::NegativeFactorial { value: n });
    }

    let mut result = 1.0;
    for i in 1..=n {
        result *= f64::from(i);
        if !result.is_finite() {
            return Err(CalcError::Overflow { operation: "factorial" });
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_powers() {
        assert_eq!(pow(2.0, 10).unwrap(), 1024.0);
        assert_eq!(pow(-3.0, 3).unwrap(), -27.0);
        assert_eq!(pow(1.5, 0).unwrap(), 1.0);
        assert_eq!(pow(0.0, 5).unwrap(), 0.0);
    }

    #[test]
    fn negative_powers_are_reciprocal() {
        assert_eq!(pow(2.0, -2).unwrap(), 0.25);
        assert_eq!(pow(-2.0, -3).unwrap(), -0.125);
    }

    #[test]
    fn zero_base() {
        assert_eq!(pow(0.0, 0).unwrap(), 1.0);
        assert!(matches!(pow(0.0, -1), Err(CalcError::DivideByZero { .. })));
    }

    #[test]
    fn extreme_exponents_terminate() {
        assert_eq!(pow(10.0, i32::MAX).unwrap(), f64::INFINITY);
        assert_eq!(pow(10.0, i32::MIN).unwrap(), 0.0);
        assert_eq!(pow(1.0, i32::MAX).unwrap(), 1.0);
        assert_eq!(pow(-1.0, i32::MAX).unwrap(), -1.0);
        assert_eq!(pow(-1.0, i32::MIN).unwrap(), 1.0);
        assert!(pow(1.000_000_1, i32::MAX).unwrap().is_finite());
    }

    #[test]
    fn odd_and_even_exponents() {
        assert_eq!(pow(3.0, 5).unwrap(), 243.0);
        assert_eq!(pow(-2.0, 6).unwrap(), 64.0);
        assert_eq!(pow(0.5, 3).unwrap(), 0.125);
    }

    #[test]
    fn small_factorials() {
        assert_eq!(factorial(0).unwrap(), 1.0);
        assert_eq!(factorial(1).unwrap(), 1.0);
        assert_eq!(factorial(5).unwrap(), 120.0);
        assert_eq!(factorial(10).unwrap(), 3_628_800.0);
    }

    #[test]
    fn factorial_limits() {
        assert!(factorial(170).unwrap().is_finite());
        assert!(matches!(factorial(171), Err(CalcError::Overflow { .. })));
        assert!(matches!(factorial(-1), Err(CalcError::NegativeFactorial { value: -1 })));
    }
}
