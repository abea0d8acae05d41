use application::transfer::BookDto;
use serde::Serialize;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    title: String,
    quantity: i64,
    #[serde(rename = "type")]
    book_type: String,
    price: i64,
    author: String,
    publisher: String,
    isbn: String,
    description: String,
    publication_year: i32,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            title: value.title,
            quantity: value.quantity,
            book_type: value.book_type,
            price: value.price,
            author: value.author,
            publisher: value.publisher,
            isbn: value.isbn,
            description: value.description,
            publication_year: value.publication_year,
        }
    }
}

pub struct BookPresenter;

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}
