//! Two-operand summation delivered through a completion callback.

use tracing::debug;

/// Computes `a + b` and hands the sum to `callback`.
///
/// The callback is consumed by the call, so it runs exactly once, and it
/// runs synchronously before this function returns. There is no error path:
/// the operands follow IEEE 754 addition, non-finite inputs included.
pub fn sum_and_callback<F>(a: f64, b: f64, callback: F)
where
    F: FnOnce(f64),
{
    let sum = a + b;
    debug!(a, b, sum, "computed sum");
    callback(sum);
}
