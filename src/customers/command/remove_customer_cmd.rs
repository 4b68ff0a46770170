use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;

pub struct RemoveCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl RemoveCustomerCommand {
    pub fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveCustomerCommandRequest {
    pub customer_id: String,
}

impl RemoveCustomerCommandRequest {
    pub fn new(customer_id: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveCustomerCommandResponse {}

#[async_trait]
impl Command<RemoveCustomerCommandRequest, RemoveCustomerCommandResponse> for RemoveCustomerCommand {
    async fn execute(&self, req: RemoveCustomerCommandRequest) -> Result<RemoveCustomerCommandResponse, CommandError> {
        self.customer_service.remove_customer(req.customer_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveCustomerCommandResponse {})
    }
}
