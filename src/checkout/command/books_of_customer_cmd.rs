use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::core::command::{Command, CommandError};

pub struct BooksOfCustomerCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl BooksOfCustomerCommand {
    pub fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BooksOfCustomerCommandRequest {
    pub customer_id: String,
}

#[derive(Debug, Serialize)]
pub struct BooksOfCustomerCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<BooksOfCustomerCommandRequest, BooksOfCustomerCommandResponse> for BooksOfCustomerCommand {
    async fn execute(&self, req: BooksOfCustomerCommandRequest) -> Result<BooksOfCustomerCommandResponse, CommandError> {
        self.checkout_service.books_of_customer(req.customer_id.as_str())
            .await.map_err(CommandError::from).map(|books| BooksOfCustomerCommandResponse { books })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::checkout::command::books_of_customer_cmd::{BooksOfCustomerCommand, BooksOfCustomerCommandRequest};
    use crate::checkout::command::customers_of_book_cmd::{CustomersOfBookCommand, CustomersOfBookCommandRequest};
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::checkout::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::Repositories;
    use crate::customers::domain::model::CustomerEntity;

    #[tokio::test]
    async fn test_should_run_views() {
        let config = Configuration::new("test");
        let repos = Repositories::build(&config).await.expect("should build repositories");
        let book = BookEntity::new(100_000, "Rust in Action", "McNamara", "systems programming");
        repos.books.save(&book).await.expect("should save book");
        let customer = CustomerEntity::new("Ada", 5551234, "12 Analytical St");
        repos.customers.save(&customer).await.expect("should save customer");
        repos.checkouts.save(&CheckoutEntity::new(book.book_id, customer.customer_id.as_str())).await.expect("should link");

        let books = BooksOfCustomerCommand::new(factory::create_checkout_service(&config, &repos))
            .execute(BooksOfCustomerCommandRequest { customer_id: customer.customer_id.to_string() })
            .await.expect("should list books");
        assert_eq!(1, books.books.len());
        let customers = CustomersOfBookCommand::new(factory::create_checkout_service(&config, &repos))
            .execute(CustomersOfBookCommandRequest { book_id: book.book_id })
            .await.expect("should list customers");
        assert_eq!(1, customers.customers.len());

        let err = CustomersOfBookCommand::new(factory::create_checkout_service(&config, &repos))
            .execute(CustomersOfBookCommandRequest { book_id: 999_999 })
            .await.expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
