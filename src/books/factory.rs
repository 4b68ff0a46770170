use std::sync::Arc;
use aws_sdk_dynamodb::types::ScalarAttributeType;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table, TableSpec};

pub fn books_table_spec(table_name: &str) -> TableSpec<'_> {
    TableSpec { table_name, pk: "book_id", pk_type: ScalarAttributeType::N, gsi: None }
}

pub fn sequences_table_spec(table_name: &str) -> TableSpec<'_> {
    TableSpec { table_name, pk: "name", pk_type: ScalarAttributeType::S, gsi: None }
}

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Arc<dyn BookRepository>> {
    match config.store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            Ok(Arc::new(DDBBookRepository::new(client, config.books_table.as_str(), config.sequences_table.as_str())))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            // tables survive restarts of DynamoDB Local, so an existing table is fine
            let _ = create_table(&client, &books_table_spec(config.books_table.as_str())).await;
            let _ = create_table(&client, &sequences_table_spec(config.sequences_table.as_str())).await;
            Ok(Arc::new(DDBBookRepository::new(client, config.books_table.as_str(), config.sequences_table.as_str())))
        }
        RepositoryStore::Memory => {
            Ok(Arc::new(MemBookRepository::new()))
        }
    }
}
