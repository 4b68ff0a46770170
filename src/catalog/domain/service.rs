use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::search::search;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
    checkout_repository: Arc<dyn CheckoutRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration,
               book_repository: Arc<dyn BookRepository>,
               checkout_repository: Arc<dyn CheckoutRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            checkout_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let book_id = self.book_repository.next_id().await?;
        let entity = BookEntity {
            book_id,
            version: 0,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
            ..BookEntity::from(book)
        };
        self.book_repository.save(&entity).await?;
        info!(branch = self.branch_id.as_str(), book_id, "added book");
        Ok(BookDto::from(&entity))
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let _ = self.book_repository.get(&id).await?;
        let unlinked = self.checkout_repository.delete_by_book(id).await?;
        self.book_repository.delete(&id).await?;
        info!(branch = self.branch_id.as_str(), book_id = id, unlinked, "removed book");
        Ok(())
    }

    async fn update_book(&self, id: i64, book: &BookDto) -> LibraryResult<BookDto> {
        let mut existing = self.book_repository.get(&id).await?;
        existing.name = book.name.to_string();
        existing.author = book.author.to_string();
        existing.category = book.category.to_string();
        existing.description = book.description.to_string();
        existing.price = book.price;
        self.book_repository.update(&existing).await?;
        self.book_repository.get(&id).await.map(|b| BookDto::from(&b))
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(&id).await.map(|b| BookDto::from(&b))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.load_all().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, keyword: &str) -> LibraryResult<Option<Vec<BookDto>>> {
        let catalog = self.find_all_books().await?;
        let res = search(&catalog, keyword);
        debug!(keyword, catalog = catalog.len(), matched = res.as_ref().map(|b| b.len()).unwrap_or(0), "searched books");
        Ok(res)
    }
}
