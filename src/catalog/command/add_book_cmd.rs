use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// fields left out of the request body default to empty text and zero
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddBookCommandRequest {
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub price: i64,
}

impl AddBookCommandRequest {
    pub fn new(name: &str, author: &str, category: &str, description: &str, price: i64) -> Self {
        Self {
            name: name.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto::new(self.name.as_str(), self.author.as_str(), self.category.as_str(),
                     self.description.as_str(), self.price)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.add_book(&req.build_book())
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
