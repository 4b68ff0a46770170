use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id)
            .await.map_err(CommandError::from).map(|_| RemoveBookCommandResponse {})
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::Repositories;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let config = Configuration::new("test");
        let repos = Repositories::build(&config).await.expect("should build repositories");
        let add_cmd = AddBookCommand::new(factory::create_catalog_service(&config, &repos));
        let remove_cmd = RemoveBookCommand::new(factory::create_catalog_service(&config, &repos));
        let list_cmd = ListBooksCommand::new(factory::create_catalog_service(&config, &repos));

        let added = add_cmd.execute(AddBookCommandRequest::new("title", "author", "cat", "desc", 5))
            .await.expect("should add book");
        assert_eq!(1, list_cmd.execute(ListBooksCommandRequest {}).await.expect("should list").books.len());
        remove_cmd.execute(RemoveBookCommandRequest::new(added.book.book_id)).await.expect("should remove book");
        assert!(list_cmd.execute(ListBooksCommandRequest {}).await.expect("should list").books.is_empty());
    }
}
