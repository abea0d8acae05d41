use std::ops::Add;

use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Fromln, AsRefln)]
pub struct TotalPrice(i64);

impl TotalPrice {
    pub fn new(price: impl Into<i64>) -> Self {
        Self(price.into())
    }
}

impl Add for TotalPrice {
    type Output = TotalPrice;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
