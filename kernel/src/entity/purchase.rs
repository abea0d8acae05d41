mod purchased_at;
mod total_price;

pub use self::{purchased_at::*, total_price::*};
use crate::entity::{Book, Client, LoyaltyPoints};
use destructure::Destructure;
use vodca::References;

/// Outcome of a settled order: the updated client and books together with
/// what was charged and earned.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Purchase {
    client: Client,
    books: Vec<Book>,
    loyalty_points: LoyaltyPoints,
    total_price: TotalPrice,
    purchased_at: PurchasedAt,
}

impl Purchase {
    pub fn new(
        client: Client,
        books: Vec<Book>,
        loyalty_points: LoyaltyPoints,
        total_price: TotalPrice,
        purchased_at: PurchasedAt,
    ) -> Self {
        Self {
            client,
            books,
            loyalty_points,
            total_price,
            purchased_at,
        }
    }
}
