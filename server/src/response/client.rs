use application::transfer::{ClientDto, PurchaseDto};
use serde::Serialize;
use time::OffsetDateTime;

use crate::controller::Exhaust;
use crate::response::BookResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    name: String,
    email: String,
    phone: String,
    address: String,
    loyalty_points: i64,
}

impl From<ClientDto> for ClientResponse {
    fn from(value: ClientDto) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            address: value.address,
            loyalty_points: value.loyalty_points,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    client: ClientResponse,
    books: Vec<BookResponse>,
    loyalty_points: i64,
    total_price: i64,
    #[serde(with = "time::serde::rfc3339")]
    purchase_date: OffsetDateTime,
}

pub struct ClientPresenter;

impl Exhaust<i64> for ClientPresenter {
    type To = axum::Json<i64>;
    fn emit(&self, input: i64) -> Self::To {
        axum::Json::from(input)
    }
}

impl Exhaust<PurchaseDto> for ClientPresenter {
    type To = axum::Json<PurchaseResponse>;
    fn emit(&self, input: PurchaseDto) -> Self::To {
        axum::Json::from(PurchaseResponse {
            client: ClientResponse::from(input.client),
            books: input.books.into_iter().map(BookResponse::from).collect(),
            loyalty_points: input.loyalty_points,
            total_price: input.total_price,
            purchase_date: input.purchased_at,
        })
    }
}
