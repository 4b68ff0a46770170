use std::collections::BTreeMap;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::customers::domain::model::CustomerEntity;
use crate::customers::repository::CustomerRepository;

#[derive(Debug, Default)]
pub struct MemCustomerRepository {
    customers: RwLock<BTreeMap<String, CustomerEntity>>,
}

impl MemCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<CustomerEntity, str> for MemCustomerRepository {
    async fn save(&self, entity: &CustomerEntity) -> LibraryResult<usize> {
        self.customers.write().await.insert(entity.customer_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &CustomerEntity) -> LibraryResult<usize> {
        let mut customers = self.customers.write().await;
        let existing = customers.get_mut(entity.customer_id.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("customer not found for {}", entity.customer_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::unavailable(
                format!("customer {} was modified, expected version {} but found {}",
                        entity.customer_id, entity.version, existing.version).as_str(), Some("409".to_string()), true));
        }
        *existing = CustomerEntity {
            version: entity.version + 1,
            updated_at: Utc::now().naive_utc(),
            ..entity.clone()
        };
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<CustomerEntity> {
        self.customers.read().await.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("customer not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        Ok(self.customers.write().await.remove(id).map(|_| 1).unwrap_or(0))
    }

    async fn load_all(&self) -> LibraryResult<Vec<CustomerEntity>> {
        Ok(self.customers.read().await.values().cloned().collect())
    }
}

impl CustomerRepository for MemCustomerRepository {}
