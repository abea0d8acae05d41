use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::KernelError;

use crate::transfer::BookDto;

#[async_trait::async_trait]
pub trait GetAvailableBooksService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_available_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self.book_query().find_all_unsold(&mut connection).await?;
        connection.commit().await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAvailableBooksService for T where T: DependOnBookQuery {}
