use application::transfer::{GetLoyaltyPointsDto, OrderDto};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;

use crate::controller::{Intake, TryIntake};

#[derive(Debug)]
pub struct GetLoyaltyPointsRequest {
    id: i64,
}

impl GetLoyaltyPointsRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    purchased_book: Vec<String>,
    free_books: Option<Vec<String>>,
}

pub struct ClientTransformer;

impl Intake<GetLoyaltyPointsRequest> for ClientTransformer {
    type To = GetLoyaltyPointsDto;
    fn emit(&self, input: GetLoyaltyPointsRequest) -> Self::To {
        GetLoyaltyPointsDto {
            client_id: input.id,
        }
    }
}

impl TryIntake<(i64, PurchaseRequest)> for ClientTransformer {
    type To = OrderDto;
    type Error = Report<KernelError>;
    fn emit(&self, input: (i64, PurchaseRequest)) -> Result<Self::To, Self::Error> {
        let (id, input) = input;
        if input.purchased_book.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("{purchasedBook=must not be empty}".to_string()));
        }
        Ok(OrderDto {
            client_id: Some(id),
            purchased_books: input.purchased_book,
            free_books: input.free_books,
        })
    }
}
