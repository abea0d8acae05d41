use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookQuantity(i64);

impl BookQuantity {
    pub fn new(quantity: impl Into<i64>) -> Self {
        Self(quantity.into())
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookSold(bool);

impl BookSold {
    pub fn new(sold: impl Into<bool>) -> Self {
        Self(sold.into())
    }
}
