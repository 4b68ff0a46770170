use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::repository::{BOOK_ID_START, BookRepository};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// In-process book store, iterated in identifier order.
#[derive(Debug)]
pub struct MemBookRepository {
    books: RwLock<BTreeMap<i64, BookEntity>>,
    sequence: AtomicI64,
}

impl MemBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(BOOK_ID_START),
        }
    }
}

impl Default for MemBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity, i64> for MemBookRepository {
    async fn save(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.write().await.insert(entity.book_id, entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let existing = books.get_mut(&entity.book_id).ok_or_else(|| LibraryError::not_found(
            format!("book not found for {}", entity.book_id).as_str()))?;
        if existing.version != entity.version {
            return Err(LibraryError::unavailable(
                format!("book {} was modified, expected version {} but found {}",
                        entity.book_id, entity.version, existing.version).as_str(), Some("409".to_string()), true));
        }
        *existing = BookEntity {
            version: entity.version + 1,
            updated_at: Utc::now().naive_utc(),
            ..entity.clone()
        };
        Ok(1)
    }

    async fn get(&self, id: &i64) -> LibraryResult<BookEntity> {
        self.books.read().await.get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &i64) -> LibraryResult<usize> {
        Ok(self.books.write().await.remove(id).map(|_| 1).unwrap_or(0))
    }

    async fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl BookRepository for MemBookRepository {
    async fn next_id(&self) -> LibraryResult<i64> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst))
    }
}
