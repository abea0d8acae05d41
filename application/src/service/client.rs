use error_stack::Report;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{ClientQuery, DependOnClientQuery};
use kernel::prelude::entity::ClientId;
use kernel::KernelError;

use crate::transfer::GetLoyaltyPointsDto;

#[async_trait::async_trait]
pub trait GetLoyaltyPointsService: 'static + Sync + Send + DependOnClientQuery {
    async fn get_loyalty_points(
        &self,
        dto: GetLoyaltyPointsDto,
    ) -> error_stack::Result<i64, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ClientId::new(dto.client_id);
        let client = self
            .client_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::ClientNotFound)
                    .attach_printable(format!("Client with ID {} not found", dto.client_id))
            })?;
        connection.commit().await?;

        Ok((*client.loyalty_points()).into())
    }
}

impl<T> GetLoyaltyPointsService for T where T: DependOnClientQuery {}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use crate::mock::{client, InMemoryDatabase};
    use crate::service::GetLoyaltyPointsService;
    use crate::transfer::GetLoyaltyPointsDto;

    #[tokio::test]
    async fn returns_balance_of_existing_client() {
        let database = InMemoryDatabase::new(Vec::new(), vec![client(1, 100), client(2, 7)]);

        let points = database
            .get_loyalty_points(GetLoyaltyPointsDto { client_id: 2 })
            .await
            .unwrap();

        assert_eq!(points, 7);
    }

    #[tokio::test]
    async fn unknown_client_is_reported() {
        let database = InMemoryDatabase::new(Vec::new(), vec![client(1, 100)]);

        let report = database
            .get_loyalty_points(GetLoyaltyPointsDto { client_id: 42 })
            .await
            .unwrap_err();

        assert_eq!(report.current_context(), &KernelError::ClientNotFound);
        assert_eq!(
            report.downcast_ref::<String>().map(String::as_str),
            Some("Client with ID 42 not found")
        );
    }
}
