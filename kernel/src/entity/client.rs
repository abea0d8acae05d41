mod contact;
mod id;
mod loyalty;
mod name;

pub use self::{contact::*, id::*, loyalty::*, name::*};

use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct Client {
    id: ClientId,
    name: ClientName,
    email: ClientEmail,
    phone: ClientPhone,
    address: ClientAddress,
    loyalty_points: LoyaltyPoints,
}

impl Client {
    pub fn new(
        id: ClientId,
        name: ClientName,
        email: ClientEmail,
        phone: ClientPhone,
        address: ClientAddress,
        loyalty_points: LoyaltyPoints,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            address,
            loyalty_points,
        }
    }

    /// Credits the points earned by a purchase and debits the ones spent on free books.
    /// Sufficiency is checked by the caller before any settlement happens.
    pub fn settle_loyalty(&mut self, earned: LoyaltyPoints, consumed: LoyaltyPoints) {
        self.loyalty_points = self.loyalty_points + earned - consumed;
    }
}
