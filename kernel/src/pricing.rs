//! Order pricing and loyalty settlement.
//!
//! Rules, applied per catalog row and summed:
//! - `NEW_RELEASE`: full price, redemptions are ignored.
//! - `REGULAR`: full price, 10% off once the order holds 3 or more units.
//! - `OLD_EDITIONS`: 20% off, 25% off once the order holds 3 or more units.
//!
//! Every charged unit earns one loyalty point; every redeemed unit of a
//! non new-release book costs [`POINTS_PER_FREE_BOOK`].

use vodca::References;

use crate::entity::{Book, BookType, Isbn, LoyaltyPoints, TotalPrice, POINTS_PER_FREE_BOOK};

/// Units in an order, counting duplicates, from which bulk discounts apply.
pub const BULK_ORDER_THRESHOLD: usize = 3;

/// Price multiplier kept as an exact ratio so that the truncation of each
/// row subtotal does not depend on floating point rounding.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Discount {
    numerator: i64,
    denominator: i64,
}

impl Discount {
    pub const NONE: Discount = Discount::new(1, 1);
    pub const REGULAR_BULK: Discount = Discount::new(9, 10);
    pub const OLD_EDITIONS: Discount = Discount::new(4, 5);
    pub const OLD_EDITIONS_BULK: Discount = Discount::new(3, 4);

    const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Discounted subtotal, truncated toward zero.
    pub fn apply(&self, subtotal: i64) -> i64 {
        subtotal * self.numerator / self.denominator
    }
}

impl BookType {
    pub fn discount(&self, bulk: bool) -> Discount {
        match (self, bulk) {
            (BookType::NewRelease, _) => Discount::NONE,
            (BookType::Regular, false) => Discount::NONE,
            (BookType::Regular, true) => Discount::REGULAR_BULK,
            (BookType::OldEditions, false) => Discount::OLD_EDITIONS,
            (BookType::OldEditions, true) => Discount::OLD_EDITIONS_BULK,
        }
    }

    /// Whether loyalty points can pay for a unit of this type.
    pub fn is_redeemable(&self) -> bool {
        !matches!(self, BookType::NewRelease)
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, References)]
pub struct Settlement {
    total_price: TotalPrice,
    loyalty_earned: LoyaltyPoints,
    loyalty_consumed: LoyaltyPoints,
}

/// Prices `books` for an order of `ordered` units, `free` of which are paid
/// with loyalty points. Pure: equal inputs always give equal settlements.
pub fn settle(books: &[Book], ordered: &[Isbn], free: &[Isbn]) -> Settlement {
    let bulk = ordered.len() >= BULK_ORDER_THRESHOLD;
    let (total_price, billed, redeemed) =
        books
            .iter()
            .fold((0i64, 0i64, 0i64), |(total_price, billed, redeemed), book| {
                let purchased = occurrences(ordered, book.isbn());
                let redeemable = if book.book_type().is_redeemable() {
                    occurrences(free, book.isbn())
                } else {
                    0
                };
                let billable = purchased - redeemable;
                let price: i64 = *book.price().as_ref();
                let charged = book.book_type().discount(bulk).apply(price * billable);
                (total_price + charged, billed + billable, redeemed + redeemable)
            });

    Settlement {
        total_price: TotalPrice::new(total_price),
        loyalty_earned: LoyaltyPoints::new(billed),
        loyalty_consumed: LoyaltyPoints::new(redeemed * POINTS_PER_FREE_BOOK),
    }
}

fn occurrences(isbns: &[Isbn], isbn: &Isbn) -> i64 {
    isbns.iter().filter(|candidate| *candidate == isbn).count() as i64
}
