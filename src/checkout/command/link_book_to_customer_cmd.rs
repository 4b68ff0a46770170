use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct LinkBookToCustomerCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl LinkBookToCustomerCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LinkBookToCustomerCommandRequest {
    pub customer_id: String,
    pub book_id: i64,
}

impl LinkBookToCustomerCommandRequest {
    pub fn new(customer_id: &str, book_id: i64) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkBookToCustomerCommandResponse {
    pub linked: bool,
}

#[async_trait]
impl Command<LinkBookToCustomerCommandRequest, LinkBookToCustomerCommandResponse> for LinkBookToCustomerCommand {
    async fn execute(&self, req: LinkBookToCustomerCommandRequest) -> Result<LinkBookToCustomerCommandResponse, CommandError> {
        self.checkout_service.add_book_to_customer(req.customer_id.as_str(), req.book_id)
            .await.map_err(CommandError::from).map(|linked| LinkBookToCustomerCommandResponse { linked })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::checkout::command::link_book_to_customer_cmd::{LinkBookToCustomerCommand, LinkBookToCustomerCommandRequest};
    use crate::checkout::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::Repositories;
    use crate::customers::domain::model::CustomerEntity;

    #[tokio::test]
    async fn test_should_run_link_book_to_customer() {
        let config = Configuration::new("test");
        let repos = Repositories::build(&config).await.expect("should build repositories");
        let book = BookEntity::new(100_000, "Rust in Action", "McNamara", "systems programming");
        repos.books.save(&book).await.expect("should save book");
        let customer = CustomerEntity::new("Ada", 5551234, "12 Analytical St");
        repos.customers.save(&customer).await.expect("should save customer");
        let cmd = LinkBookToCustomerCommand::new(factory::create_checkout_service(&config, &repos));

        let res = cmd.execute(LinkBookToCustomerCommandRequest::new(customer.customer_id.as_str(), book.book_id))
            .await.expect("should link");
        assert!(res.linked);
        let res = cmd.execute(LinkBookToCustomerCommandRequest::new("no-such-customer", book.book_id))
            .await.expect("should not fail");
        assert!(!res.linked);
    }
}
