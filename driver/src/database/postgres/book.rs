use error_stack::Report;
use sqlx::PgConnection;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookAuthor, BookDescription, BookId, BookPrice, BookPublisher, BookQuantity, BookSold,
    BookTitle, BookType, Isbn, PublicationYear,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn find_unsold_by_isbns(
        &self,
        con: &mut PostgresTransaction,
        isbns: &[Isbn],
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_unsold_by_isbns(con, isbns).await
    }

    async fn find_all_unsold(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all_unsold(con).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn update_all(
        &self,
        con: &mut PostgresTransaction,
        books: &[Book],
    ) -> error_stack::Result<(), KernelError> {
        for book in books {
            PgBookInternal::update(con, book).await?;
        }
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    #[sqlx(rename = "type")]
    book_type: String,
    price: i64,
    author: String,
    publisher: String,
    isbn: String,
    description: String,
    publication_year: i32,
    quantity: i64,
    sold: bool,
}

impl TryFrom<BookRow> for Book {
    type Error = Report<KernelError>;
    fn try_from(value: BookRow) -> Result<Self, Self::Error> {
        let book_type = value.book_type.parse::<BookType>()?;
        Ok(Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            book_type,
            BookPrice::new(value.price),
            BookAuthor::new(value.author),
            BookPublisher::new(value.publisher),
            Isbn::new(value.isbn),
            BookDescription::new(value.description),
            PublicationYear::new(value.publication_year),
            BookQuantity::new(value.quantity),
            BookSold::new(value.sold),
        ))
    }
}

fn into_books(rows: Vec<BookRow>) -> error_stack::Result<Vec<Book>, KernelError> {
    rows.into_iter().map(Book::try_from).collect()
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    #[tracing::instrument(skip(con))]
    async fn find_unsold_by_isbns(
        con: &mut PgConnection,
        isbns: &[Isbn],
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let isbns = isbns
            .iter()
            .cloned()
            .map(String::from)
            .collect::<Vec<_>>();
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, type, price, author, publisher, isbn, description, publication_year, quantity, sold
            FROM books
            WHERE isbn = ANY($1) AND sold = FALSE
            ORDER BY id
            FOR UPDATE
            "#,
        )
        .bind(isbns)
        .fetch_all(con)
        .await
        .convert_error()?;
        into_books(rows)
    }

    #[tracing::instrument(skip(con))]
    async fn find_all_unsold(con: &mut PgConnection) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, type, price, author, publisher, isbn, description, publication_year, quantity, sold
            FROM books
            WHERE sold = FALSE
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        into_books(rows)
    }

    #[cfg(test)]
    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO books (id, title, type, price, author, publisher, isbn, description, publication_year, quantity, sold)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.book_type().as_str())
        .bind(book.price().as_ref())
        .bind(book.author().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.isbn().as_ref())
        .bind(book.description().as_ref())
        .bind(book.publication_year().as_ref())
        .bind(book.quantity().as_ref())
        .bind(book.sold().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    #[tracing::instrument(skip(con))]
    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE books
            SET title = $2, type = $3, price = $4, author = $5, publisher = $6, isbn = $7,
                description = $8, publication_year = $9, quantity = $10, sold = $11
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.book_type().as_str())
        .bind(book.price().as_ref())
        .bind(book.author().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.isbn().as_ref())
        .bind(book.description().as_ref())
        .bind(book.publication_year().as_ref())
        .bind(book.quantity().as_ref())
        .bind(book.sold().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::Rng;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        Book, BookAuthor, BookDescription, BookId, BookPrice, BookPublisher, BookQuantity,
        BookSold, BookTitle, BookType, Isbn, PublicationYear,
    };
    use kernel::KernelError;

    use crate::database::postgres::book::{PgBookInternal, PostgresBookRepository};
    use crate::database::postgres::PostgresDatabase;
    use crate::error::ConvertError;

    fn book(id: i64, quantity: i64) -> Book {
        Book::new(
            BookId::new(id),
            BookTitle::new("test"),
            BookType::OldEditions,
            BookPrice::new(250),
            BookAuthor::new("author"),
            BookPublisher::new("publisher"),
            Isbn::new(format!("test-{id}")),
            BookDescription::new("description"),
            PublicationYear::new(1999),
            BookQuantity::new(quantity),
            BookSold::new(quantity == 0),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn find_and_update() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;
        let id = rand::thread_rng().gen_range(1_000_000..i64::MAX);
        let book = book(id, 2);

        PgBookInternal::create(&mut con, &book).await?;

        let found = PostgresBookRepository
            .find_unsold_by_isbns(&mut con, &[book.isbn().clone(), book.isbn().clone()])
            .await?;
        assert_eq!(found, vec![book.clone()]);

        let sold = book.reconstruct(|b| {
            b.quantity = BookQuantity::new(0);
            b.sold = BookSold::new(true);
        });
        PostgresBookRepository
            .update_all(&mut con, &[sold.clone()])
            .await?;

        let found = PostgresBookRepository
            .find_unsold_by_isbns(&mut con, &[sold.isbn().clone()])
            .await?;
        assert!(found.is_empty());
        let unsold = PostgresBookRepository.find_all_unsold(&mut con).await?;
        assert!(!unsold.contains(&sold));

        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn unknown_type_fails_conversion() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;
        let id = rand::thread_rng().gen_range(1_000_000..i64::MAX);

        sqlx::query("ALTER TABLE books DROP CONSTRAINT IF EXISTS books_type_check")
            .execute(&mut *con)
            .await
            .convert_error()?;
        sqlx::query(
            r#"
            INSERT INTO books (id, title, type, price, author, publisher, isbn, description, publication_year, quantity, sold)
            VALUES ($1, 'test', 'COMIC', 100, 'author', 'publisher', $2, '', 2000, 1, FALSE)
            "#,
        )
        .bind(id)
        .bind(format!("test-{id}"))
        .execute(&mut *con)
        .await
        .convert_error()?;

        let report = PostgresBookRepository
            .find_unsold_by_isbns(&mut con, &[Isbn::new(format!("test-{id}"))])
            .await
            .unwrap_err();
        assert_eq!(report.current_context(), &KernelError::UnknownBookType);

        Ok(())
    }
}
