use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::customers::dto::CustomerDto;

pub mod model;
pub mod service;

// CheckoutService maintains the many-to-many relation between books and customers.
// Linking returns false, without changing anything, when either side does not exist.
#[async_trait]
pub trait CheckoutService: Sync + Send {
    async fn add_customer_to_book(&self, book_id: i64, customer_id: &str) -> LibraryResult<bool>;
    async fn add_book_to_customer(&self, customer_id: &str, book_id: i64) -> LibraryResult<bool>;
    async fn customers_of_book(&self, book_id: i64) -> LibraryResult<Vec<CustomerDto>>;
    async fn books_of_customer(&self, customer_id: &str) -> LibraryResult<Vec<BookDto>>;
}
