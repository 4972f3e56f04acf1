//! Arithmetic helpers.

use std::ops::Add;

/// Sum of `a` and `b`.
///
/// Generic over anything implementing [`Add`]. Overflow follows the rules of
/// the operand type: integers panic in debug builds and wrap in release.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}
