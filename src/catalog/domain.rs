pub mod search;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // stores the book under a newly issued id, any id in the input is ignored
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    // removes the book together with every checkout that references it
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
    // copies name, author, category, description and price onto the stored book
    async fn update_book(&self, id: i64, book: &BookDto) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn search_books(&self, keyword: &str) -> LibraryResult<Option<Vec<BookDto>>>;
}
