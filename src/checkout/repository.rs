pub mod ddb_checkout_repository;
pub mod mem_checkout_repository;

use async_trait::async_trait;
use crate::checkout::domain::model::CheckoutEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait CheckoutRepository: Repository<CheckoutEntity, str> {
    async fn find_by_book(&self, book_id: i64) -> LibraryResult<Vec<CheckoutEntity>>;

    async fn find_by_customer(&self, customer_id: &str) -> LibraryResult<Vec<CheckoutEntity>>;

    // deletes every checkout of the book and returns how many were removed
    async fn delete_by_book(&self, book_id: i64) -> LibraryResult<usize> {
        let mut deleted = 0;
        for checkout in self.find_by_book(book_id).await? {
            deleted += self.delete(checkout.checkout_id.as_str()).await?;
        }
        Ok(deleted)
    }

    // deletes every checkout of the customer and returns how many were removed
    async fn delete_by_customer(&self, customer_id: &str) -> LibraryResult<usize> {
        let mut deleted = 0;
        for checkout in self.find_by_customer(customer_id).await? {
            deleted += self.delete(checkout.checkout_id.as_str()).await?;
        }
        Ok(deleted)
    }
}
