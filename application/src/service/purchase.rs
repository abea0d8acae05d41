use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, ClientQuery, DependOnBookQuery, DependOnClientQuery};
use kernel::interface::update::{
    BookModifier, ClientModifier, DependOnBookModifier, DependOnClientModifier,
};
use kernel::prelude::entity::{Isbn, LoyaltyPoints, Order, Purchase, PurchasedAt};
use kernel::prelude::pricing::settle;
use kernel::KernelError;
use tracing::{info, warn};

use crate::transfer::{OrderDto, PurchaseDto};

#[async_trait::async_trait]
pub trait PurchaseService:
    'static
    + Sync
    + Send
    + DependOnClientQuery
    + DependOnClientModifier
    + DependOnBookQuery
    + DependOnBookModifier
{
    /// Validates the order, prices it and settles the client's loyalty balance
    /// and the catalog stock in one transaction.
    async fn purchase(&self, dto: OrderDto) -> error_stack::Result<PurchaseDto, KernelError> {
        let order = Order::from(dto);
        if order.ordered_books().is_empty() {
            return Err(rejected(
                KernelError::IncorrectOrder,
                "The list of books cannot be null or empty".to_string(),
            ));
        }
        let client_id = (*order.client_id()).ok_or_else(|| {
            rejected(
                KernelError::ClientNotFound,
                "Client ID cannot be null".to_string(),
            )
        })?;

        let mut connection = self.database_connection().transact().await?;

        let mut client = self
            .client_query()
            .find_by_id(&mut connection, &client_id)
            .await?
            .ok_or_else(|| {
                rejected(
                    KernelError::ClientNotFound,
                    format!("Client with ID {} not found", i64::from(client_id)),
                )
            })?;

        let mut books = self
            .book_query()
            .find_unsold_by_isbns(&mut connection, order.ordered_books())
            .await?;
        if books.is_empty() {
            return Err(rejected(
                KernelError::BookNotFound,
                "No books found for the given ISBN list".to_string(),
            ));
        }
        let missing = order.missing_from(&books);
        if !missing.is_empty() {
            return Err(rejected(
                KernelError::BookNotFound,
                format!("Book with ISBN {} does not exist", enumerate(&missing)),
            ));
        }
        let unordered = order.unordered_free_books();
        if !unordered.is_empty() {
            return Err(rejected(
                KernelError::BookNotFound,
                format!(
                    "To use the loyalty points the books with ISBN {} should be in the list of purchased books.",
                    enumerate(&unordered)
                ),
            ));
        }
        let required = LoyaltyPoints::required_for(order.free_books().len());
        if required > LoyaltyPoints::default() && client.loyalty_points() < &required {
            return Err(rejected(
                KernelError::NotEnoughLoyaltyPoints,
                "Not enough loyalty points to receive the free books".to_string(),
            ));
        }

        let over_redeemed = order.over_redeemed_books(&books);
        if !over_redeemed.is_empty() {
            return Err(rejected(
                KernelError::IncorrectOrder,
                format!(
                    "Cannot redeem more copies of the books with ISBN {} than are purchased",
                    enumerate(&over_redeemed)
                ),
            ));
        }

        let settlement = settle(&books, order.ordered_books(), order.free_books());

        client.settle_loyalty(*settlement.loyalty_earned(), *settlement.loyalty_consumed());
        self.client_modifier()
            .update(&mut connection, &client)
            .await?;

        for book in books.iter_mut() {
            let units = order.units_of(book.isbn());
            book.take_stock(units).map_err(|report| {
                warn!("Purchase rejected: {report:?}");
                report
            })?;
        }
        self.book_modifier()
            .update_all(&mut connection, &books)
            .await?;

        connection.commit().await?;

        info!(
            client = i64::from(client_id),
            total_price = i64::from(*settlement.total_price()),
            earned = i64::from(*settlement.loyalty_earned()),
            consumed = i64::from(*settlement.loyalty_consumed()),
            "Purchase completed"
        );

        let purchase = Purchase::new(
            client,
            books,
            *settlement.loyalty_earned(),
            *settlement.total_price(),
            PurchasedAt::now(),
        );
        Ok(PurchaseDto::from(purchase))
    }
}

impl<T> PurchaseService for T where
    T: DependOnClientQuery + DependOnClientModifier + DependOnBookQuery + DependOnBookModifier
{
}

fn rejected(kind: KernelError, message: String) -> Report<KernelError> {
    warn!(code = kind.code(), "Purchase rejected: {message}");
    Report::new(kind).attach_printable(message)
}

fn enumerate(isbns: &[Isbn]) -> String {
    let joined = isbns
        .iter()
        .map(Isbn::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
