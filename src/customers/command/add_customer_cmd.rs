use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub struct AddCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl AddCustomerCommand {
    pub fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

// fields left out of the request body default to empty text and zero
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddCustomerCommandRequest {
    pub name: String,
    pub phone: i64,
    pub address: String,
}

impl AddCustomerCommandRequest {
    pub fn new(name: &str, phone: i64, address: &str) -> Self {
        Self {
            name: name.to_string(),
            phone,
            address: address.to_string(),
        }
    }

    pub fn build_customer(&self) -> CustomerDto {
        CustomerDto::new(self.name.as_str(), self.phone, self.address.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct AddCustomerCommandResponse {
    pub customer: CustomerDto,
}

impl AddCustomerCommandResponse {
    pub fn new(customer: CustomerDto) -> Self {
        Self {
            customer,
        }
    }
}

#[async_trait]
impl Command<AddCustomerCommandRequest, AddCustomerCommandResponse> for AddCustomerCommand {
    async fn execute(&self, req: AddCustomerCommandRequest) -> Result<AddCustomerCommandResponse, CommandError> {
        self.customer_service.add_customer(&req.build_customer()).await
            .map_err(CommandError::from).map(AddCustomerCommandResponse::new)
    }
}
