use std::sync::Arc;
use aws_sdk_dynamodb::types::ScalarAttributeType;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::checkout::repository::CheckoutRepository;
use crate::checkout::repository::ddb_checkout_repository::DDBCheckoutRepository;
use crate::checkout::repository::mem_checkout_repository::MemCheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::{Repositories, RepositoryStore};
use crate::utils::ddb::{build_db_client, create_table, TableSpec};

pub fn checkouts_table_spec(table_name: &str) -> TableSpec<'_> {
    TableSpec { table_name, pk: "checkout_id", pk_type: ScalarAttributeType::S, gsi: Some(("customer_id", "created_at")) }
}

pub async fn create_checkout_repository(config: &Configuration) -> LibraryResult<Arc<dyn CheckoutRepository>> {
    let index_name = format!("{}_ndx", config.checkouts_table);
    match config.store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            Ok(Arc::new(DDBCheckoutRepository::new(client, config.checkouts_table.as_str(), index_name.as_str())))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            let _ = create_table(&client, &checkouts_table_spec(config.checkouts_table.as_str())).await;
            Ok(Arc::new(DDBCheckoutRepository::new(client, config.checkouts_table.as_str(), index_name.as_str())))
        }
        RepositoryStore::Memory => {
            Ok(Arc::new(MemCheckoutRepository::new()))
        }
    }
}

pub fn create_checkout_service(config: &Configuration, repos: &Repositories) -> Box<dyn CheckoutService> {
    Box::new(CheckoutServiceImpl::new(config, repos.checkouts.clone(),
                                      repos.books.clone(), repos.customers.clone()))
}
