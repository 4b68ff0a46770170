pub mod ddb_book_repository;
pub mod mem_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// first identifier issued to a new book, keeping ids in the six-digit range
pub const BOOK_ID_START: i64 = 100_000;

#[async_trait]
pub trait BookRepository: Repository<BookEntity, i64> {
    // issues the next unused book identifier
    async fn next_id(&self) -> LibraryResult<i64>;
}
