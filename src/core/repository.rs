use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::factory::create_book_repository;
use crate::books::repository::BookRepository;
use crate::checkout::factory::create_checkout_repository;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::customers::factory::create_customer_repository;
use crate::customers::repository::CustomerRepository;

#[async_trait]
pub trait Repository<Entity, Key: ?Sized + Sync>: Sync + Send {
    // inserts or replaces an entity
    async fn save(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an existing entity if its stored version still matches
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &Key) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &Key) -> LibraryResult<usize>;

    // loads every entity in store iteration order
    async fn load_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    #[serde(rename = "dynamodb", alias = "ddb")]
    DynamoDB,
    #[serde(rename = "local")]
    LocalDynamoDB,
    #[serde(rename = "memory", alias = "mem")]
    Memory,
}

// Repositories bundles the stores shared by all services of one process so that
// books, customers and checkouts observe the same underlying data.
#[derive(Clone)]
pub struct Repositories {
    pub books: Arc<dyn BookRepository>,
    pub customers: Arc<dyn CustomerRepository>,
    pub checkouts: Arc<dyn CheckoutRepository>,
}

impl Repositories {
    pub async fn build(config: &Configuration) -> LibraryResult<Repositories> {
        Ok(Repositories {
            books: create_book_repository(config).await?,
            customers: create_customer_repository(config).await?,
            checkouts: create_checkout_repository(config).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::{Repositories, RepositoryStore};

    #[tokio::test]
    async fn test_should_name_stores() {
        assert_eq!(RepositoryStore::DynamoDB, serde_json::from_str::<RepositoryStore>("\"dynamodb\"").expect("should parse"));
        assert_eq!(RepositoryStore::DynamoDB, serde_json::from_str::<RepositoryStore>("\"ddb\"").expect("should parse"));
        assert_eq!(RepositoryStore::LocalDynamoDB, serde_json::from_str::<RepositoryStore>("\"local\"").expect("should parse"));
        assert_eq!("\"memory\"", serde_json::to_string(&RepositoryStore::Memory).expect("should serialize"));
        assert!(serde_json::from_str::<RepositoryStore>("\"postgres\"").is_err());
    }

    #[tokio::test]
    async fn test_should_build_memory_repositories() {
        let repos = Repositories::build(&Configuration::new("test")).await.expect("should build repositories");
        assert!(repos.books.load_all().await.expect("should load books").is_empty());
        assert!(repos.customers.load_all().await.expect("should load customers").is_empty());
        assert!(repos.checkouts.load_all().await.expect("should load checkouts").is_empty());
    }
}
