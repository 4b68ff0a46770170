use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub version: i64,
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub price: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    // builds an unsaved book; the catalog assigns the identifier when it is added
    pub fn new(name: &str, author: &str, category: &str, description: &str, price: i64) -> BookDto {
        BookDto {
            book_id: 0,
            version: 0,
            name: name.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn book_id(&self) -> i64 {
        self.book_id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn description(&self) -> &str {
        self.description.as_str()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            version: other.version,
            name: other.name.to_string(),
            author: other.author.to_string(),
            category: other.category.to_string(),
            description: other.description.to_string(),
            price: other.price,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            version: other.version,
            name: other.name.to_string(),
            author: other.author.to_string(),
            category: other.category.to_string(),
            description: other.description.to_string(),
            price: other.price,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
