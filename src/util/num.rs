use crate::error::{CalcError, CalcResult};

/// Narrows an `f64` to an `i32` if and only if no information is lost.
///
/// The conversion succeeds when the integer converts back to exactly the same
/// double, so fractional, non-finite and out-of-range values all fail.
///
/// ## Errors
/// Returns `Narrowing` with the original value if the conversion is lossy.
///
/// ## Example
/// ```
/// use tally::{error::CalcError, util::num::narrow};
///
/// assert_eq!(narrow(-12.0).unwrap(), -12);
///
/// let err = narrow(1.5).unwrap_err();
/// assert!(matches!(err, CalcError::Narrowing { .. }));
///
/// assert!(narrow(1e10).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::float_cmp)]
pub fn narrow(value: f64) -> CalcResult<i32> {
    let narrowed = value as i32;
    if f64::from(narrowed) != value {
        return Err(CalcError::Narrowing { value });
    }
    Ok(narrowed)
}
