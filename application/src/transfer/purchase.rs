use kernel::prelude::entity::{ClientId, DestructPurchase, Isbn, Order, Purchase};
use time::OffsetDateTime;

use crate::transfer::{BookDto, ClientDto};

#[derive(Debug)]
pub struct OrderDto {
    pub client_id: Option<i64>,
    pub purchased_books: Vec<String>,
    pub free_books: Option<Vec<String>>,
}

impl From<OrderDto> for Order {
    fn from(value: OrderDto) -> Self {
        Order::new(
            value.client_id.map(ClientId::new),
            value.purchased_books.into_iter().map(Isbn::new).collect(),
            value
                .free_books
                .map(|free| free.into_iter().map(Isbn::new).collect()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDto {
    pub client: ClientDto,
    pub books: Vec<BookDto>,
    pub loyalty_points: i64,
    pub total_price: i64,
    pub purchased_at: OffsetDateTime,
}

impl From<Purchase> for PurchaseDto {
    fn from(value: Purchase) -> Self {
        let DestructPurchase {
            client,
            books,
            loyalty_points,
            total_price,
            purchased_at,
        } = value.into_destruct();
        Self {
            client: ClientDto::from(client),
            books: books.into_iter().map(BookDto::from).collect(),
            loyalty_points: loyalty_points.into(),
            total_price: total_price.into(),
            purchased_at: purchased_at.into(),
        }
    }
}
