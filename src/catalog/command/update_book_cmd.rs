use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateBookCommandRequest {
    // taken from the route rather than the body
    #[serde(skip)]
    pub book_id: i64,
    pub name: String,
    pub author: String,
    pub category: String,
    pub description: String,
    pub price: i64,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, name: &str, author: &str, category: &str, description: &str, price: i64) -> Self {
        Self {
            book_id,
            name: name.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            book_id: self.book_id,
            ..BookDto::new(self.name.as_str(), self.author.as_str(), self.category.as_str(),
                           self.description.as_str(), self.price)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id, &req.build_book())
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::Repositories;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let config = Configuration::new("test");
        let repos = Repositories::build(&config).await.expect("should build repositories");
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&config, &repos));
        let update_cmd = UpdateBookCommand::new(factory::create_catalog_service(&config, &repos));

        let added = add_cmd.execute(AddBookCommandRequest::new("title", "author", "cat", "desc", 5))
            .await.expect("should add book");
        let updated = update_cmd.execute(UpdateBookCommandRequest::new(
            added.book.book_id, "new title", "new author", "new cat", "new desc", 9))
            .await.expect("should update book");
        assert_eq!(added.book.book_id, updated.book.book_id);
        assert_eq!("new title", updated.book.name.as_str());
        assert_eq!(9, updated.book.price);

        let err = update_cmd.execute(UpdateBookCommandRequest::new(999_999, "t", "a", "c", "d", 1))
            .await.expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
