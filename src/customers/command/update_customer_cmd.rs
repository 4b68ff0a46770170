use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub struct UpdateCustomerCommand {
    customer_service: Box<dyn CustomerService>,
}

impl UpdateCustomerCommand {
    pub fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCustomerCommandRequest {
    // taken from the route rather than the body
    #[serde(skip)]
    pub customer_id: String,
    pub name: String,
    pub phone: i64,
    pub address: String,
}

impl UpdateCustomerCommandRequest {
    pub fn new(customer_id: &str, name: &str, phone: i64, address: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            name: name.to_string(),
            phone,
            address: address.to_string(),
        }
    }

    pub fn build_customer(&self) -> CustomerDto {
        CustomerDto {
            customer_id: self.customer_id.to_string(),
            ..CustomerDto::new(self.name.as_str(), self.phone, self.address.as_str())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateCustomerCommandResponse {
    pub customer: CustomerDto,
}

impl UpdateCustomerCommandResponse {
    pub fn new(customer: CustomerDto) -> Self {
        Self {
            customer,
        }
    }
}

#[async_trait]
impl Command<UpdateCustomerCommandRequest, UpdateCustomerCommandResponse> for UpdateCustomerCommand {
    async fn execute(&self, req: UpdateCustomerCommandRequest) -> Result<UpdateCustomerCommandResponse, CommandError> {
        self.customer_service.update_customer(req.customer_id.as_str(), &req.build_customer()).await
            .map_err(CommandError::from).map(UpdateCustomerCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::Repositories;
    use crate::customers::command::add_customer_cmd::{AddCustomerCommand, AddCustomerCommandRequest};
    use crate::customers::command::update_customer_cmd::{UpdateCustomerCommand, UpdateCustomerCommandRequest};
    use crate::customers::factory;

    #[tokio::test]
    async fn test_should_run_update_customer() {
        let config = Configuration::new("test");
        let repos = Repositories::build(&config).await.expect("should build repositories");
        let add_cmd = AddCustomerCommand::new(factory::create_customer_service(&config, &repos));
        let update_cmd = UpdateCustomerCommand::new(factory::create_customer_service(&config, &repos));

        let added = add_cmd.execute(AddCustomerCommandRequest::new("Ada", 5551234, "12 Analytical St")).await
            .expect("should add customer");
        let updated = update_cmd.execute(UpdateCustomerCommandRequest::new(
            added.customer.customer_id.as_str(), "Ada Lovelace", 5559999, "1 Engine Way")).await
            .expect("should update customer");
        assert_eq!(added.customer.customer_id, updated.customer.customer_id);
        assert_eq!("Ada Lovelace", updated.customer.name.as_str());

        let err = update_cmd.execute(UpdateCustomerCommandRequest::new("missing", "x", 0, "y")).await
            .expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
