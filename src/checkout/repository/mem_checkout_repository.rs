use std::collections::BTreeMap;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::repository::CheckoutRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug, Default)]
pub struct MemCheckoutRepository {
    checkouts: RwLock<BTreeMap<String, CheckoutEntity>>,
}

impl MemCheckoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<CheckoutEntity, str> for MemCheckoutRepository {
    async fn save(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        self.checkouts.write().await.insert(entity.checkout_id.to_string(), entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let mut checkouts = self.checkouts.write().await;
        let existing = checkouts.get_mut(entity.checkout_id.as_str()).ok_or_else(|| LibraryError::not_found(
            format!("checkout not found for {}", entity.checkout_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::unavailable(
                format!("checkout {} was modified, expected version {} but found {}",
                        entity.checkout_id, entity.version, existing.version).as_str(), Some("409".to_string()), true));
        }
        *existing = CheckoutEntity {
            version: entity.version + 1,
            updated_at: Utc::now().naive_utc(),
            ..entity.clone()
        };
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<CheckoutEntity> {
        self.checkouts.read().await.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("checkout not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        Ok(self.checkouts.write().await.remove(id).map(|_| 1).unwrap_or(0))
    }

    async fn load_all(&self) -> LibraryResult<Vec<CheckoutEntity>> {
        Ok(self.checkouts.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl CheckoutRepository for MemCheckoutRepository {
    async fn find_by_book(&self, book_id: i64) -> LibraryResult<Vec<CheckoutEntity>> {
        Ok(self.checkouts.read().await.values()
            .filter(|c| c.book_id == book_id)
            .cloned().collect())
    }

    async fn find_by_customer(&self, customer_id: &str) -> LibraryResult<Vec<CheckoutEntity>> {
        let mut res: Vec<CheckoutEntity> = self.checkouts.read().await.values()
            .filter(|c| c.customer_id == customer_id)
            .cloned().collect();
        // same order as the customer index in DynamoDB
        res.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(res)
    }
}
