use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Book, Isbn};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Unsold books whose ISBN is any of `isbns`. Repeated ISBNs do not repeat rows.
    async fn find_unsold_by_isbns(
        &self,
        con: &mut Self::Transaction,
        isbns: &[Isbn],
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_all_unsold(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookQuery: BookQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn book_query(&self) -> &Self::BookQuery;
}
