use std::sync::Arc;
use aws_sdk_dynamodb::types::ScalarAttributeType;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::{Repositories, RepositoryStore};
use crate::customers::domain::CustomerService;
use crate::customers::domain::service::CustomerServiceImpl;
use crate::customers::repository::CustomerRepository;
use crate::customers::repository::ddb_customer_repository::DDBCustomerRepository;
use crate::customers::repository::mem_customer_repository::MemCustomerRepository;
use crate::utils::ddb::{build_db_client, create_table, TableSpec};

pub fn customers_table_spec(table_name: &str) -> TableSpec<'_> {
    TableSpec { table_name, pk: "customer_id", pk_type: ScalarAttributeType::S, gsi: None }
}

pub async fn create_customer_repository(config: &Configuration) -> LibraryResult<Arc<dyn CustomerRepository>> {
    match config.store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            Ok(Arc::new(DDBCustomerRepository::new(client, config.customers_table.as_str())))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            let _ = create_table(&client, &customers_table_spec(config.customers_table.as_str())).await;
            Ok(Arc::new(DDBCustomerRepository::new(client, config.customers_table.as_str())))
        }
        RepositoryStore::Memory => {
            Ok(Arc::new(MemCustomerRepository::new()))
        }
    }
}

pub fn create_customer_service(config: &Configuration, repos: &Repositories) -> Box<dyn CustomerService> {
    Box::new(CustomerServiceImpl::new(config, repos.customers.clone(), repos.checkouts.clone()))
}
