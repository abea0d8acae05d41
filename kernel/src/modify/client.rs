use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Client;
use crate::KernelError;

#[async_trait::async_trait]
pub trait ClientModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        client: &Client,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnClientModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ClientModifier: ClientModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn client_modifier(&self) -> &Self::ClientModifier;
}
