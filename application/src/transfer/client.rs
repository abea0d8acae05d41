use kernel::prelude::entity::{Client, DestructClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub loyalty_points: i64,
}

impl From<Client> for ClientDto {
    fn from(value: Client) -> Self {
        let DestructClient {
            id,
            name,
            email,
            phone,
            address,
            loyalty_points,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            loyalty_points: loyalty_points.into(),
        }
    }
}

#[derive(Debug)]
pub struct GetLoyaltyPointsDto {
    pub client_id: i64,
}
