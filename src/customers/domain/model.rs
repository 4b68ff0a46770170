use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// CustomerEntity abstracts a library member who can check out books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerEntity {
    pub customer_id: String,
    pub version: i64,
    pub name: String,
    pub phone: i64,
    pub address: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CustomerEntity {
    pub fn new(name: &str, phone: i64, address: &str) -> Self {
        Self {
            customer_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            phone,
            address: address.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for CustomerEntity {
    fn id(&self) -> String {
        self.customer_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
