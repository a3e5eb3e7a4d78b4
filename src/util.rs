/// Numeric conversion helpers.
///
/// Provides the lossless `f64` to integer narrowing used by `%`, `!` and the
/// exponent of `pow`. A conversion either round-trips exactly or fails with
/// [`crate::error::CalcError::Narrowing`].
pub mod num;
