use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub book_type: String,
    pub price: i64,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub description: String,
    pub publication_year: i32,
    pub quantity: i64,
    pub sold: bool,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            book_type,
            price,
            author,
            publisher,
            isbn,
            description,
            publication_year,
            quantity,
            sold,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            book_type: book_type.to_string(),
            price: price.into(),
            author: author.into(),
            publisher: publisher.into(),
            isbn: isbn.into(),
            description: description.into(),
            publication_year: publication_year.into(),
            quantity: quantity.into(),
            sold: sold.into(),
        }
    }
}
