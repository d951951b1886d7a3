use serde::{Deserialize, Serialize};

use tallycart_core::Price;

/// Anything that exposes a numeric price.
///
/// This is the only contract `calculate_total` needs from its input, so callers
/// can total their own record types without converting them into line entries.
pub trait Priced {
    fn price(&self) -> f64;
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price(&self) -> f64 {
        (**self).price()
    }
}

impl Priced for f64 {
    fn price(&self) -> f64 {
        *self
    }
}

impl Priced for Price {
    fn price(&self) -> f64 {
        self.value()
    }
}

/// A single product + price record held by a cart.
///
/// Immutable once built: fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineEntry<P> {
    product: P,
    price: f64,
}

impl<P> LineEntry<P> {
    pub fn new(product: P, price: impl Into<f64>) -> Self {
        Self {
            product,
            price: price.into(),
        }
    }

    pub fn product(&self) -> &P {
        &self.product
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl<P> Priced for LineEntry<P> {
    fn price(&self) -> f64 {
        self.price
    }
}
