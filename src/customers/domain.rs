pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::customers::dto::CustomerDto;

#[async_trait]
pub trait CustomerService: Sync + Send {
    async fn add_customer(&self, customer: &CustomerDto) -> LibraryResult<CustomerDto>;
    // removes the customer together with every checkout that references it
    async fn remove_customer(&self, id: &str) -> LibraryResult<()>;
    // copies name, phone and address onto the stored customer
    async fn update_customer(&self, id: &str, customer: &CustomerDto) -> LibraryResult<CustomerDto>;
    async fn find_customer_by_id(&self, id: &str) -> LibraryResult<CustomerDto>;
    async fn find_all_customers(&self) -> LibraryResult<Vec<CustomerDto>>;
}
