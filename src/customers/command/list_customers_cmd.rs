use async_trait::async_trait;
use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::customers::domain::CustomerService;
use crate::customers::dto::CustomerDto;

pub struct ListCustomersCommand {
    customer_service: Box<dyn CustomerService>,
}

impl ListCustomersCommand {
    pub fn new(customer_service: Box<dyn CustomerService>) -> Self {
        Self {
            customer_service,
        }
    }
}

#[derive(Debug)]
pub struct ListCustomersCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListCustomersCommandResponse {
    pub customers: Vec<CustomerDto>,
}

#[async_trait]
impl Command<ListCustomersCommandRequest, ListCustomersCommandResponse> for ListCustomersCommand {
    async fn execute(&self, _req: ListCustomersCommandRequest) -> Result<ListCustomersCommandResponse, CommandError> {
        self.customer_service.find_all_customers()
            .await.map_err(CommandError::from).map(|customers| ListCustomersCommandResponse { customers })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::Repositories;
    use crate::customers::command::add_customer_cmd::{AddCustomerCommand, AddCustomerCommandRequest};
    use crate::customers::command::list_customers_cmd::{ListCustomersCommand, ListCustomersCommandRequest};
    use crate::customers::factory;

    #[tokio::test]
    async fn test_should_run_list_customers() {
        let config = Configuration::new("test");
        let repos = Repositories::build(&config).await.expect("should build repositories");
        let add_cmd = AddCustomerCommand::new(factory::create_customer_service(&config, &repos));
        let list_cmd = ListCustomersCommand::new(factory::create_customer_service(&config, &repos));

        assert!(list_cmd.execute(ListCustomersCommandRequest {}).await.expect("should list").customers.is_empty());
        add_cmd.execute(AddCustomerCommandRequest::new("Ada", 1, "a")).await.expect("should add customer");
        add_cmd.execute(AddCustomerCommandRequest::new("Grace", 2, "b")).await.expect("should add customer");
        assert_eq!(2, list_cmd.execute(ListCustomersCommandRequest {}).await.expect("should list").customers.len());
    }
}
