use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};
use crate::customers::dto::CustomerDto;

pub struct CustomersOfBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CustomersOfBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CustomersOfBookCommandRequest {
    pub book_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CustomersOfBookCommandResponse {
    pub customers: Vec<CustomerDto>,
}

#[async_trait]
impl Command<CustomersOfBookCommandRequest, CustomersOfBookCommandResponse> for CustomersOfBookCommand {
    async fn execute(&self, req: CustomersOfBookCommandRequest) -> Result<CustomersOfBookCommandResponse, CommandError> {
        self.checkout_service.customers_of_book(req.book_id)
            .await.map_err(CommandError::from).map(|customers| CustomersOfBookCommandResponse { customers })
    }
}
