//! In-memory stores for exercising services without a database.
//!
//! A transaction works on a copy of the store taken when it begins; committing
//! publishes the copy, dropping it discards every write.

use std::sync::{Arc, Mutex};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, ClientQuery, DependOnBookQuery, DependOnClientQuery};
use kernel::interface::update::{
    BookModifier, ClientModifier, DependOnBookModifier, DependOnClientModifier,
};
use kernel::prelude::entity::{
    Book, BookAuthor, BookDescription, BookId, BookPrice, BookPublisher, BookQuantity, BookSold,
    BookTitle, BookType, Client, ClientAddress, ClientEmail, ClientId, ClientName, ClientPhone,
    Isbn, LoyaltyPoints, PublicationYear,
};
use kernel::KernelError;

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub books: Vec<Book>,
    pub clients: Vec<Client>,
}

#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<Mutex<Store>>,
}

impl InMemoryDatabase {
    pub fn new(books: Vec<Book>, clients: Vec<Client>) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store { books, clients })),
        }
    }

    pub fn snapshot(&self) -> Store {
        self.store.lock().unwrap().clone()
    }
}

pub struct InMemoryTransaction {
    store: Arc<Mutex<Store>>,
    working: Store,
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(InMemoryTransaction {
            store: Arc::clone(&self.store),
            working: self.snapshot(),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let InMemoryTransaction { store, working } = self;
        *store.lock().unwrap() = working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn find_unsold_by_isbns(
        &self,
        con: &mut InMemoryTransaction,
        isbns: &[Isbn],
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con
            .working
            .books
            .iter()
            .filter(|book| !bool::from(*book.sold()) && isbns.contains(book.isbn()))
            .cloned()
            .collect())
    }

    async fn find_all_unsold(
        &self,
        con: &mut InMemoryTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con
            .working
            .books
            .iter()
            .filter(|book| !bool::from(*book.sold()))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl BookModifier for InMemoryBookRepository {
    type Transaction = InMemoryTransaction;

    async fn update_all(
        &self,
        con: &mut InMemoryTransaction,
        books: &[Book],
    ) -> error_stack::Result<(), KernelError> {
        for book in books {
            if let Some(stored) = con
                .working
                .books
                .iter_mut()
                .find(|stored| stored.id() == book.id())
            {
                *stored = book.clone();
            }
        }
        Ok(())
    }
}

pub struct InMemoryClientRepository;

#[async_trait::async_trait]
impl ClientQuery for InMemoryClientRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &ClientId,
    ) -> error_stack::Result<Option<Client>, KernelError> {
        Ok(con
            .working
            .clients
            .iter()
            .find(|client| client.id() == id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl ClientModifier for InMemoryClientRepository {
    type Transaction = InMemoryTransaction;

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        client: &Client,
    ) -> error_stack::Result<(), KernelError> {
        if let Some(stored) = con
            .working
            .clients
            .iter_mut()
            .find(|stored| stored.id() == client.id())
        {
            *stored = client.clone();
        }
        Ok(())
    }
}

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl DependOnClientQuery for InMemoryDatabase {
    type ClientQuery = InMemoryClientRepository;
    fn client_query(&self) -> &Self::ClientQuery {
        &InMemoryClientRepository
    }
}

impl DependOnClientModifier for InMemoryDatabase {
    type ClientModifier = InMemoryClientRepository;
    fn client_modifier(&self) -> &Self::ClientModifier {
        &InMemoryClientRepository
    }
}

pub fn isbn(index: i64) -> String {
    format!("978-1-23456-789-{index}")
}

pub fn book(index: i64, book_type: BookType, price: i64, quantity: i64) -> Book {
    Book::new(
        BookId::new(index + 1),
        BookTitle::new(format!("Book {index}")),
        book_type,
        BookPrice::new(price),
        BookAuthor::new(format!("Author {index}")),
        BookPublisher::new(format!("Publisher {index}")),
        Isbn::new(isbn(index)),
        BookDescription::new(""),
        PublicationYear::new(2020),
        BookQuantity::new(quantity),
        BookSold::new(quantity == 0),
    )
}

pub fn client(id: i64, loyalty_points: i64) -> Client {
    Client::new(
        ClientId::new(id),
        ClientName::new("John Doe"),
        ClientEmail::new("john.doe@example.com"),
        ClientPhone::new("555-0100"),
        ClientAddress::new("1 Main Street"),
        LoyaltyPoints::new(loyalty_points),
    )
}

/// Ten books, one or two copies each: five new releases, two regular and three old editions.
pub fn catalog() -> Vec<Book> {
    vec![
        book(0, BookType::NewRelease, 500, 2),
        book(1, BookType::NewRelease, 300, 1),
        book(2, BookType::OldEditions, 200, 2),
        book(3, BookType::NewRelease, 600, 1),
        book(4, BookType::Regular, 350, 2),
        book(5, BookType::OldEditions, 250, 1),
        book(6, BookType::NewRelease, 550, 2),
        book(7, BookType::Regular, 400, 1),
        book(8, BookType::OldEditions, 300, 2),
        book(9, BookType::NewRelease, 700, 1),
    ]
}
