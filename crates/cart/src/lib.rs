//! Shopping cart aggregation.
//!
//! Pure, synchronous domain logic: an append-only [`Cart`] of line entries and
//! the [`calculate_total`] fold that sums any sequence of priced values.

pub mod cart;
pub mod line;
pub mod total;

pub use cart::Cart;
pub use line::{LineEntry, Priced};
pub use total::{calculate_total, checked_total};
