use sqlx::PgConnection;

use kernel::interface::query::ClientQuery;
use kernel::interface::update::ClientModifier;
use kernel::prelude::entity::{
    Client, ClientAddress, ClientEmail, ClientId, ClientName, ClientPhone, LoyaltyPoints,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresClientRepository;

#[async_trait::async_trait]
impl ClientQuery for PostgresClientRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &ClientId,
    ) -> error_stack::Result<Option<Client>, KernelError> {
        PgClientInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl ClientModifier for PostgresClientRepository {
    type Transaction = PostgresTransaction;

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        client: &Client,
    ) -> error_stack::Result<(), KernelError> {
        PgClientInternal::update(con, client).await
    }
}

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    address: String,
    loyalty_points: i64,
}

impl From<ClientRow> for Client {
    fn from(value: ClientRow) -> Self {
        Client::new(
            ClientId::new(value.id),
            ClientName::new(value.name),
            ClientEmail::new(value.email),
            ClientPhone::new(value.phone),
            ClientAddress::new(value.address),
            LoyaltyPoints::new(value.loyalty_points),
        )
    }
}

pub(in crate::database) struct PgClientInternal;

impl PgClientInternal {
    #[tracing::instrument(skip(con))]
    async fn find_by_id(
        con: &mut PgConnection,
        id: &ClientId,
    ) -> error_stack::Result<Option<Client>, KernelError> {
        let row = sqlx::query_as::<_, ClientRow>(
            // language=postgresql
            r#"
            SELECT id, name, email, phone, address, loyalty_points
            FROM clients
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Client::from))
    }

    #[cfg(test)]
    async fn create(con: &mut PgConnection, client: &Client) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO clients (id, name, email, phone, address, loyalty_points)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(client.id().as_ref())
        .bind(client.name().as_ref())
        .bind(client.email().as_ref())
        .bind(client.phone().as_ref())
        .bind(client.address().as_ref())
        .bind(client.loyalty_points().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    #[tracing::instrument(skip(con))]
    async fn update(con: &mut PgConnection, client: &Client) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE clients
            SET name = $2, email = $3, phone = $4, address = $5, loyalty_points = $6
            WHERE id = $1
            "#,
        )
        .bind(client.id().as_ref())
        .bind(client.name().as_ref())
        .bind(client.email().as_ref())
        .bind(client.phone().as_ref())
        .bind(client.address().as_ref())
        .bind(client.loyalty_points().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
