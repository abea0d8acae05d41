use std::ops::{Add, Sub};

use vodca::{AsRefln, Fromln};

/// Points needed to redeem one free book.
pub const POINTS_PER_FREE_BOOK: i64 = 10;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct LoyaltyPoints(i64);

impl LoyaltyPoints {
    pub fn new(points: impl Into<i64>) -> Self {
        Self(points.into())
    }

    /// Balance a client must hold before asking for `free_books` redemptions.
    pub fn required_for(free_books: usize) -> Self {
        let free_books = i64::try_from(free_books).unwrap_or(i64::MAX);
        Self(free_books.saturating_mul(POINTS_PER_FREE_BOOK))
    }
}

impl Add for LoyaltyPoints {
    type Output = LoyaltyPoints;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for LoyaltyPoints {
    type Output = LoyaltyPoints;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
