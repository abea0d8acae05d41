use std::collections::{HashMap, HashSet};

use vodca::References;

use crate::entity::{Book, ClientId, Isbn};

/// A purchase request. Every entry of `ordered_books` is one unit; entries of
/// `free_books` ask for that unit to be paid with loyalty points instead.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Order {
    client_id: Option<ClientId>,
    ordered_books: Vec<Isbn>,
    free_books: Vec<Isbn>,
}

impl Order {
    pub fn new(
        client_id: Option<ClientId>,
        ordered_books: Vec<Isbn>,
        free_books: Option<Vec<Isbn>>,
    ) -> Self {
        Self {
            client_id,
            ordered_books,
            free_books: free_books.unwrap_or_default(),
        }
    }

    /// Units of `isbn` in the order.
    pub fn units_of(&self, isbn: &Isbn) -> i64 {
        self.ordered_books
            .iter()
            .filter(|ordered| *ordered == isbn)
            .count() as i64
    }

    /// Ordered ISBNs with no matching book, de-duplicated in request order.
    pub fn missing_from(&self, books: &[Book]) -> Vec<Isbn> {
        let found = books.iter().map(Book::isbn).collect::<HashSet<_>>();
        distinct(self.ordered_books.iter().filter(|isbn| !found.contains(isbn)))
    }

    /// Free ISBNs that were never ordered.
    pub fn unordered_free_books(&self) -> Vec<Isbn> {
        let ordered = self.ordered_books.iter().collect::<HashSet<_>>();
        distinct(self.free_books.iter().filter(|isbn| !ordered.contains(isbn)))
    }

    /// Free ISBNs of redeemable `books` requested more often than they were ordered.
    /// New releases are never redeemed, so repeating them is harmless.
    pub fn over_redeemed_books(&self, books: &[Book]) -> Vec<Isbn> {
        let redeemable = books
            .iter()
            .filter(|book| book.book_type().is_redeemable())
            .map(Book::isbn)
            .collect::<HashSet<_>>();
        let ordered = tally(&self.ordered_books);
        let free = tally(&self.free_books);
        distinct(self.free_books.iter().filter(|isbn| {
            redeemable.contains(isbn)
                && free.get(isbn).copied().unwrap_or_default()
                    > ordered.get(isbn).copied().unwrap_or_default()
        }))
    }
}

fn tally(isbns: &[Isbn]) -> HashMap<&Isbn, usize> {
    isbns.iter().fold(HashMap::new(), |mut counts, isbn| {
        *counts.entry(isbn).or_default() += 1;
        counts
    })
}

fn distinct<'a>(isbns: impl Iterator<Item = &'a Isbn>) -> Vec<Isbn> {
    let mut seen = HashSet::new();
    isbns
        .filter(|isbn| seen.insert(*isbn))
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use crate::entity::{
        Book, BookAuthor, BookDescription, BookId, BookPrice, BookPublisher, BookQuantity,
        BookSold, BookTitle, BookType, ClientId, Isbn, Order, PublicationYear,
    };

    fn isbns(values: &[&str]) -> Vec<Isbn> {
        values.iter().map(|value| Isbn::new(*value)).collect()
    }

    fn book(isbn: &str, book_type: BookType) -> Book {
        Book::new(
            BookId::new(1),
            BookTitle::new("Book"),
            book_type,
            BookPrice::new(300),
            BookAuthor::new("Author B"),
            BookPublisher::new("Publisher B"),
            Isbn::new(isbn),
            BookDescription::new(""),
            PublicationYear::new(2020),
            BookQuantity::new(1),
            BookSold::default(),
        )
    }

    #[test]
    fn missing_from_lists_each_unknown_isbn_once() {
        let order = Order::new(
            Some(ClientId::new(1)),
            isbns(&["a", "x", "b", "x", "y"]),
            None,
        );
        let books = [book("a", BookType::Regular), book("b", BookType::Regular)];
        assert_eq!(order.missing_from(&books), isbns(&["x", "y"]));
    }

    #[test]
    fn unordered_free_books_are_reported() {
        let order = Order::new(
            Some(ClientId::new(1)),
            isbns(&["a", "b"]),
            Some(isbns(&["b", "c", "c"])),
        );
        assert_eq!(order.unordered_free_books(), isbns(&["c"]));
    }

    #[test]
    fn over_redemption_is_reported() {
        let order = Order::new(
            Some(ClientId::new(1)),
            isbns(&["a", "a", "b"]),
            Some(isbns(&["a", "a", "b", "b"])),
        );
        let books = [book("a", BookType::Regular), book("b", BookType::Regular)];
        assert_eq!(order.over_redeemed_books(&books), isbns(&["b"]));
    }

    #[test]
    fn repeated_new_release_is_not_over_redeemed() {
        let order = Order::new(
            Some(ClientId::new(1)),
            isbns(&["n"]),
            Some(isbns(&["n", "n"])),
        );
        assert!(order
            .over_redeemed_books(&[book("n", BookType::NewRelease)])
            .is_empty());
    }

    #[test]
    fn absent_free_list_is_empty() {
        let order = Order::new(Some(ClientId::new(1)), isbns(&["a"]), None);
        assert!(order.free_books().is_empty());
        assert!(order.unordered_free_books().is_empty());
        assert!(order
            .over_redeemed_books(&[book("a", BookType::Regular)])
            .is_empty());
    }
}
