//! The list element type and its parity rule.

/// The element stored in a sequential list.
pub type Elem = i32;

/// Whether `value` is odd under Rust's `%` operator.
///
/// `%` truncates toward zero, so `-3 % 2 == -1`. Any non-zero remainder
/// counts as odd, which makes negative odd numbers odd as expected.
#[inline]
pub fn is_odd(value: Elem) -> bool {
    value % 2 != 0
}
