use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub struct GetCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl GetCustomerCommand {
    pub fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetCustomerCommandRequest {
    pub customer_id: String,
}

impl GetCustomerCommandRequest {
    pub fn new(customer_id: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetCustomerCommandResponse {
    pub customer: CustomerDto,
}

impl GetCustomerCommandResponse {
    pub fn new(customer: CustomerDto) -> Self {
        Self {
            customer,
        }
    }
}

#[async_trait]
impl Command<GetCustomerCommandRequest, GetCustomerCommandResponse> for GetCustomerCommand {
    async fn execute(&self, req: GetCustomerCommandRequest) -> Result<GetCustomerCommandResponse, CommandError> {
        self.customer_service.find_customer_by_id(req.customer_id.as_str())
            .await.map_err(CommandError::from).map(GetCustomerCommandResponse::new)
    }
}
