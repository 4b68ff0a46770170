use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::customers::domain::CustomerService;
use crate::customers::domain::model::CustomerEntity;
use crate::customers::dto::CustomerDto;
use crate::customers::repository::CustomerRepository;

pub struct CustomerServiceImpl {
    branch_id: String,
    customer_repository: Arc<dyn CustomerRepository>,
    checkout_repository: Arc<dyn CheckoutRepository>,
}

impl CustomerServiceImpl {
    pub fn new(config: &Configuration,
               customer_repository: Arc<dyn CustomerRepository>,
               checkout_repository: Arc<dyn CheckoutRepository>) -> Self {
        CustomerServiceImpl {
            branch_id: config.branch_id.to_string(),
            customer_repository,
            checkout_repository,
        }
    }
}

#[async_trait]
impl CustomerService for CustomerServiceImpl {
    async fn add_customer(&self, customer: &CustomerDto) -> LibraryResult<CustomerDto> {
        let entity = CustomerEntity::new(customer.name.as_str(), customer.phone, customer.address.as_str());
        self.customer_repository.save(&entity).await?;
        info!(branch = self.branch_id.as_str(), customer_id = entity.customer_id.as_str(), "added customer");
        Ok(CustomerDto::from(&entity))
    }

    async fn remove_customer(&self, id: &str) -> LibraryResult<()> {
        let _ = self.customer_repository.get(id).await?;
        let unlinked = self.checkout_repository.delete_by_customer(id).await?;
        self.customer_repository.delete(id).await?;
        info!(branch = self.branch_id.as_str(), customer_id = id, unlinked, "removed customer");
        Ok(())
    }

    async fn update_customer(&self, id: &str, customer: &CustomerDto) -> LibraryResult<CustomerDto> {
        let mut existing = self.customer_repository.get(id).await?;
        existing.name = customer.name.to_string();
        existing.phone = customer.phone;
        existing.address = customer.address.to_string();
        self.customer_repository.update(&existing).await?;
        self.customer_repository.get(id).await.map(|c| CustomerDto::from(&c))
    }

    async fn find_customer_by_id(&self, id: &str) -> LibraryResult<CustomerDto> {
        self.customer_repository.get(id).await.map(|c| CustomerDto::from(&c))
    }

    async fn find_all_customers(&self) -> LibraryResult<Vec<CustomerDto>> {
        let res = self.customer_repository.load_all().await?;
        Ok(res.iter().map(CustomerDto::from).collect())
    }
}
