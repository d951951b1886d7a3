//! Price totaling over arbitrary sequences.

use tallycart_core::{DomainError, DomainResult};

use crate::line::Priced;

/// Sum the prices of `items`, left to right, starting from `0.0`.
///
/// Summation follows iteration order, which only matters for floating-point
/// rounding. An empty input totals to `0.0`.
///
/// Non-numeric prices cannot reach this function (`Priced` yields an `f64`).
/// NaN and infinite prices are not rejected; they propagate through the sum
/// the way IEEE-754 addition does. Use [`checked_total`] to reject them.
pub fn calculate_total<I>(items: I) -> f64
where
    I: IntoIterator,
    I::Item: Priced,
{
    items.into_iter().fold(0.0, |acc, item| acc + item.price())
}

/// Like [`calculate_total`], but fails with [`DomainError::InvalidEntry`] at the
/// first entry whose price is NaN or infinite, or whose addition overflows the
/// running total. The reported index is 0-based.
pub fn checked_total<I>(items: I) -> DomainResult<f64>
where
    I: IntoIterator,
    I::Item: Priced,
{
    items
        .into_iter()
        .enumerate()
        .try_fold(0.0, |acc, (index, item)| {
            let price = item.price();
            if price.is_nan() {
                return Err(reject(index, "price is not a number"));
            }
            if price.is_infinite() {
                return Err(reject(index, "price is infinite"));
            }

            let next = acc + price;
            if !next.is_finite() {
                return Err(reject(index, "running total overflowed"));
            }
            Ok(next)
        })
}

fn reject(index: usize, reason: &str) -> DomainError {
    tracing::debug!(index, reason, "rejected priced entry");
    DomainError::invalid_entry(index, reason)
}
