use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::customers::domain::model::CustomerEntity;
use crate::customers::repository::CustomerRepository;
use crate::utils::ddb::{parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date};

#[derive(Debug)]
pub struct DDBCustomerRepository {
    client: Client,
    table_name: String,
}

impl DDBCustomerRepository {
    pub fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<CustomerEntity, str> for DDBCustomerRepository {
    async fn save(&self, entity: &CustomerEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn update(&self, entity: &CustomerEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("customer_id", AttributeValue::S(entity.customer_id.clone()))
            .update_expression("SET #version = :version, #name = :name, #phone = :phone, #address = :address, #updated_at = :updated_at")
            .expression_attribute_names("#version", "version")
            .expression_attribute_names("#name", "name")
            .expression_attribute_names("#phone", "phone")
            .expression_attribute_names("#address", "address")
            .expression_attribute_names("#updated_at", "updated_at")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":name", AttributeValue::S(entity.name.to_string()))
            .expression_attribute_values(":phone", AttributeValue::N(entity.phone.to_string()))
            .expression_attribute_values(":address", AttributeValue::S(entity.address.to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(#version) AND #version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<CustomerEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "customer_id = :customer_id",
            )
            .expression_attribute_values(
                ":customer_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many customers for {}", id).as_str(), None, false));
                } else if let Some(map) = items.first() {
                    return Ok(map_to_customer(map));
                }
                Err(LibraryError::not_found(format!("customer item not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("customer not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("customer_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn load_all(&self) -> LibraryResult<Vec<CustomerEntity>> {
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
            records.extend(req.items.as_ref().unwrap_or(&def_items).iter().map(map_to_customer));
            exclusive_start_key = req.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        Ok(records)
    }
}

impl CustomerRepository for DDBCustomerRepository {}

fn map_to_customer(map: &HashMap<String, AttributeValue>) -> CustomerEntity {
    CustomerEntity {
        customer_id: parse_string_attribute("customer_id", map).unwrap_or(String::from("")),
        version: parse_number_attribute("version", map),
        name: parse_string_attribute("name", map).unwrap_or(String::from("")),
        phone: parse_number_attribute("phone", map),
        address: parse_string_attribute("address", map).unwrap_or(String::from("")),
        created_at: parse_date_attribute("created_at", map).unwrap_or(Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or(Utc::now().naive_utc()),
    }
}
