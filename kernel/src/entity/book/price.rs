use vodca::{AsRefln, Fromln};

/// Unit price in the smallest currency unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookPrice(i64);

impl BookPrice {
    pub fn new(price: impl Into<i64>) -> Self {
        Self(price.into())
    }
}
