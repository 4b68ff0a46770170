use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// CheckoutEntity records that a customer has checked out a book. There is at most one
// record per (book, customer) pair since the key is derived from both identifiers.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutEntity {
    pub checkout_id: String,
    pub version: i64,
    pub book_id: i64,
    pub customer_id: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CheckoutEntity {
    pub fn new(book_id: i64, customer_id: &str) -> Self {
        Self {
            checkout_id: CheckoutEntity::key(book_id, customer_id),
            version: 0,
            book_id,
            customer_id: customer_id.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn key(book_id: i64, customer_id: &str) -> String {
        format!("{}#{}", book_id, customer_id)
    }
}

impl Identifiable for CheckoutEntity {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
