use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct LinkCustomerToBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl LinkCustomerToBookCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LinkCustomerToBookCommandRequest {
    pub book_id: i64,
    pub customer_id: String,
}

impl LinkCustomerToBookCommandRequest {
    pub fn new(book_id: i64, customer_id: &str) -> Self {
        Self {
            book_id,
            customer_id: customer_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkCustomerToBookCommandResponse {
    pub linked: bool,
}

#[async_trait]
impl Command<LinkCustomerToBookCommandRequest, LinkCustomerToBookCommandResponse> for LinkCustomerToBookCommand {
    async fn execute(&self, req: LinkCustomerToBookCommandRequest) -> Result<LinkCustomerToBookCommandResponse, CommandError> {
        self.checkout_service.add_customer_to_book(req.book_id, req.customer_id.as_str())
            .await.map_err(CommandError::from).map(|linked| LinkCustomerToBookCommandResponse { linked })
    }
}
