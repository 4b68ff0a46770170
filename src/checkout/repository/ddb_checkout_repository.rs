use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::repository::CheckoutRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date};

#[derive(Debug)]
pub struct DDBCheckoutRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBCheckoutRepository {
    pub fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    async fn scan(&self, filter: Option<(&str, AttributeValue)>) -> LibraryResult<Vec<CheckoutEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key = None;
        loop {
            let mut request = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key);
            if let Some((field, value)) = &filter {
                request = request
                    .filter_expression("#field = :value")
                    .expression_attribute_names("#field", *field)
                    .expression_attribute_values(":value", value.clone());
            }
            let req = request.send().await.map_err(LibraryError::from)?;
            let def_items = vec![];
            records.extend(req.items.as_ref().unwrap_or(&def_items).iter().map(CheckoutEntity::from));
            exclusive_start_key = req.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl Repository<CheckoutEntity, str> for DDBCheckoutRepository {
    async fn save(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn update(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("checkout_id", AttributeValue::S(entity.checkout_id.clone()))
            .update_expression("SET #version = :version, #updated_at = :updated_at")
            .expression_attribute_names("#version", "version")
            .expression_attribute_names("#updated_at", "updated_at")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(#version) AND #version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<CheckoutEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "checkout_id = :checkout_id",
            )
            .expression_attribute_values(
                ":checkout_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many checkout for {}", id).as_str(), None, false));
                } else if let Some(map) = items.first() {
                    return Ok(CheckoutEntity::from(map));
                }
                Err(LibraryError::not_found(format!("checkout not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("checkout not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("checkout_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn load_all(&self) -> LibraryResult<Vec<CheckoutEntity>> {
        self.scan(None).await
    }
}

#[async_trait]
impl CheckoutRepository for DDBCheckoutRepository {
    // no index on book_id, checkouts of a book are rare enough to filter a scan
    async fn find_by_book(&self, book_id: i64) -> LibraryResult<Vec<CheckoutEntity>> {
        self.scan(Some(("book_id", AttributeValue::N(book_id.to_string())))).await
    }

    async fn find_by_customer(&self, customer_id: &str) -> LibraryResult<Vec<CheckoutEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let index_name: &str = self.index_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key = None;
        loop {
            let req = self.client
                .query()
                .table_name(table_name)
                .index_name(index_name)
                .consistent_read(false)
                .key_condition_expression("customer_id = :customer_id")
                .expression_attribute_values(":customer_id", AttributeValue::S(customer_id.to_string()))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await.map_err(LibraryError::from)?;
            let def_items = vec![];
            records.extend(req.items.as_ref().unwrap_or(&def_items).iter().map(CheckoutEntity::from));
            exclusive_start_key = req.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        Ok(records)
    }
}

impl From<&HashMap<String, AttributeValue>> for CheckoutEntity {
    fn from(map: &HashMap<String, AttributeValue>) -> Self {
        CheckoutEntity {
            checkout_id: parse_string_attribute("checkout_id", map).unwrap_or_else(|| String::from("")),
            version: parse_number_attribute("version", map),
            book_id: parse_number_attribute("book_id", map),
            customer_id: parse_string_attribute("customer_id", map).unwrap_or_else(|| String::from("")),
            created_at: parse_date_attribute("created_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
            updated_at: parse_date_attribute("updated_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
        }
    }
}
