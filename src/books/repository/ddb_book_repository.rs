use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::repository::{BOOK_ID_START, BookRepository};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
    sequences_table: String,
}

impl DDBBookRepository {
    pub fn new(client: Client, table_name: &str, sequences_table: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            sequences_table: sequences_table.to_string(),
        }
    }
}

#[async_trait]
impl Repository<BookEntity, i64> for DDBBookRepository {
    async fn save(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    // Note you cannot use certain reserved words per https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/ReservedWords.html
    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::N(entity.book_id.to_string()))
            .update_expression("SET #version = :version, #name = :name, #author = :author, #category = :category, #description = :description, #price = :price, #updated_at = :updated_at")
            .expression_attribute_names("#version", "version")
            .expression_attribute_names("#name", "name")
            .expression_attribute_names("#author", "author")
            .expression_attribute_names("#category", "category")
            .expression_attribute_names("#description", "description")
            .expression_attribute_names("#price", "price")
            .expression_attribute_names("#updated_at", "updated_at")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":name", AttributeValue::S(entity.name.to_string()))
            .expression_attribute_values(":author", AttributeValue::S(entity.author.to_string()))
            .expression_attribute_values(":category", AttributeValue::S(entity.category.to_string()))
            .expression_attribute_values(":description", AttributeValue::S(entity.description.to_string()))
            .expression_attribute_values(":price", AttributeValue::N(entity.price.to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(#version) AND #version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &i64) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "book_id = :book_id",
            )
            .expression_attribute_values(
                ":book_id",
                AttributeValue::N(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many books for {}", id).as_str(), None, false));
                } else if let Some(map) = items.first() {
                    return Ok(map_to_book(map));
                }
                Err(LibraryError::not_found(format!("book item not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &i64) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::N(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key = None;
        loop {
            let req = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await.map_err(LibraryError::from)?;
            let def_items = vec![];
            records.extend(req.items.as_ref().unwrap_or(&def_items).iter().map(map_to_book));
            exclusive_start_key = req.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        // scan order is by hash partition, so restore catalog order
        records.sort_by_key(|b| b.book_id);
        debug!("loaded {} books from {}", records.len(), table_name);
        Ok(records)
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn next_id(&self) -> LibraryResult<i64> {
        let sequences_table: &str = self.sequences_table.as_ref();
        let out = self.client
            .update_item()
            .table_name(sequences_table)
            .key("name", AttributeValue::S(self.table_name.to_string()))
            .update_expression("SET #value = if_not_exists(#value, :start) + :incr")
            .expression_attribute_names("#value", "value")
            .expression_attribute_values(":start", AttributeValue::N((BOOK_ID_START - 1).to_string()))
            .expression_attribute_values(":incr", AttributeValue::N("1".to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await.map_err(LibraryError::from)?;
        out.attributes()
            .map(|attrs| parse_number_attribute("value", attrs))
            .filter(|id| *id >= BOOK_ID_START)
            .ok_or_else(|| LibraryError::database(
                format!("sequence for {} returned no value", self.table_name).as_str(), None, false))
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: parse_number_attribute("book_id", map),
        version: parse_number_attribute("version", map),
        name: parse_string_attribute("name", map).unwrap_or(String::from("")),
        author: parse_string_attribute("author", map).unwrap_or(String::from("")),
        category: parse_string_attribute("category", map).unwrap_or(String::from("")),
        description: parse_string_attribute("description", map).unwrap_or(String::from("")),
        price: parse_number_attribute("price", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now().naive_utc()),
    }
}
