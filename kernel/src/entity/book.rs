mod detail;
mod id;
mod isbn;
mod kind;
mod price;
mod stock;
mod title;

pub use self::{detail::*, id::*, isbn::*, kind::*, price::*, stock::*, title::*};
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    book_type: BookType,
    price: BookPrice,
    author: BookAuthor,
    publisher: BookPublisher,
    isbn: Isbn,
    description: BookDescription,
    publication_year: PublicationYear,
    quantity: BookQuantity,
    sold: BookSold,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        title: BookTitle,
        book_type: BookType,
        price: BookPrice,
        author: BookAuthor,
        publisher: BookPublisher,
        isbn: Isbn,
        description: BookDescription,
        publication_year: PublicationYear,
        quantity: BookQuantity,
        sold: BookSold,
    ) -> Self {
        Self {
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
        }
    }

    /// Removes `count` copies from stock, flagging the book as sold once none remain.
    /// Leaves the book untouched when the stock cannot cover the request.
    pub fn take_stock(&mut self, count: i64) -> error_stack::Result<(), KernelError> {
        let quantity: i64 = *self.quantity.as_ref();
        let remaining = quantity - count;
        if remaining < 0 {
            return Err(Report::new(KernelError::NotEnoughBooks).attach_printable(format!(
                "Not enough quantity for book with ISBN {}",
                self.isbn
            )));
        }
        self.quantity = BookQuantity::new(remaining);
        if remaining == 0 {
            self.sold = BookSold::new(true);
        }
        Ok(())
    }
}
