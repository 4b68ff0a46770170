use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::model::CheckoutEntity;
use crate::checkout::repository::CheckoutRepository;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::LibraryResult;
use crate::customers::domain::model::CustomerEntity;
use crate::customers::dto::CustomerDto;
use crate::customers::repository::CustomerRepository;

pub struct CheckoutServiceImpl {
    branch_id: String,
    checkout_repository: Arc<dyn CheckoutRepository>,
    book_repository: Arc<dyn BookRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CheckoutServiceImpl {
    pub fn new(config: &Configuration,
               checkout_repository: Arc<dyn CheckoutRepository>,
               book_repository: Arc<dyn BookRepository>,
               customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            checkout_repository,
            book_repository,
            customer_repository,
        }
    }

    async fn find_book(&self, book_id: i64) -> LibraryResult<Option<BookEntity>> {
        found(self.book_repository.get(&book_id).await)
    }

    async fn find_customer(&self, customer_id: &str) -> LibraryResult<Option<CustomerEntity>> {
        found(self.customer_repository.get(customer_id).await)
    }

    async fn link(&self, book_id: i64, customer_id: &str) -> LibraryResult<bool> {
        let book = self.find_book(book_id).await?;
        let customer = self.find_customer(customer_id).await?;
        match (book, customer) {
            (Some(book), Some(customer)) => {
                let key = CheckoutEntity::key(book.book_id, customer.id().as_str());
                // an existing pair keeps its record so the customer's view order is stable
                if let Some(existing) = found(self.checkout_repository.get(key.as_str()).await)? {
                    debug!(branch = self.branch_id.as_str(), checkout_id = existing.id().as_str(),
                        version = existing.version(), "book and customer already linked");
                    return Ok(true);
                }
                let checkout = CheckoutEntity::new(book.book_id, customer.id().as_str());
                self.checkout_repository.save(&checkout).await?;
                info!(branch = self.branch_id.as_str(), checkout_id = checkout.id().as_str(), "linked book and customer");
                Ok(true)
            }
            (book, customer) => {
                warn!(branch = self.branch_id.as_str(), book_id, customer_id,
                    book_found = book.is_some(), customer_found = customer.is_some(),
                    "cannot link missing book or customer");
                Ok(false)
            }
        }
    }
}

// turns a not-found lookup into None and keeps every other failure
fn found<T>(res: LibraryResult<T>) -> LibraryResult<Option<T>> {
    match res {
        Ok(entity) => Ok(Some(entity)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn add_customer_to_book(&self, book_id: i64, customer_id: &str) -> LibraryResult<bool> {
        self.link(book_id, customer_id).await
    }

    async fn add_book_to_customer(&self, customer_id: &str, book_id: i64) -> LibraryResult<bool> {
        self.link(book_id, customer_id).await
    }

    async fn customers_of_book(&self, book_id: i64) -> LibraryResult<Vec<CustomerDto>> {
        let _ = self.book_repository.get(&book_id).await?;
        let mut customers = vec![];
        for checkout in self.checkout_repository.find_by_book(book_id).await? {
            // a customer removed after the lookup above is skipped
            if let Some(customer) = self.find_customer(checkout.customer_id.as_str()).await? {
                customers.push(CustomerDto::from(&customer));
            }
        }
        Ok(customers)
    }

    async fn books_of_customer(&self, customer_id: &str) -> LibraryResult<Vec<BookDto>> {
        let _ = self.customer_repository.get(customer_id).await?;
        let mut books = vec![];
        for checkout in self.checkout_repository.find_by_customer(customer_id).await? {
            if let Some(book) = self.find_book(checkout.book_id).await? {
                books.push(BookDto::from(&book));
            }
        }
        Ok(books)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::domain::model::CheckoutEntity;
    use crate::checkout::factory;
    use crate::core::domain::Configuration;
    use crate::core::repository::Repositories;
    use crate::customers::domain::model::CustomerEntity;

    async fn fixture() -> (Repositories, Box<dyn CheckoutService>, BookEntity, CustomerEntity) {
        let config = Configuration::new("test");
        let repos = Repositories::build(&config).await.expect("should build repositories");
        let svc = factory::create_checkout_service(&config, &repos);
        let book = BookEntity::new(42, "Go in Action", "Kennedy", "concurrency patterns");
        repos.books.save(&book).await.expect("should save book");
        let customer = CustomerEntity::new("Ada", 5551234, "12 Analytical St");
        repos.customers.save(&customer).await.expect("should save customer");
        (repos, svc, book, customer)
    }

    #[tokio::test]
    async fn test_should_link_customer_to_book() {
        let (_repos, svc, book, customer) = fixture().await;

        assert!(svc.add_customer_to_book(book.book_id, customer.customer_id.as_str()).await.expect("should link"));

        let customers = svc.customers_of_book(book.book_id).await.expect("should list customers");
        assert_eq!(vec![customer.customer_id.to_string()],
                   customers.iter().map(|c| c.customer_id.to_string()).collect::<Vec<String>>());
        let books = svc.books_of_customer(customer.customer_id.as_str()).await.expect("should list books");
        assert_eq!(vec![book.book_id], books.iter().map(|b| b.book_id).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_should_link_book_to_customer_visible_from_book() {
        let (_repos, svc, book, customer) = fixture().await;

        assert!(svc.add_book_to_customer(customer.customer_id.as_str(), book.book_id).await.expect("should link"));

        let customers = svc.customers_of_book(book.book_id).await.expect("should list customers");
        assert_eq!(1, customers.len());
        assert_eq!(customer.customer_id, customers[0].customer_id);
    }

    #[tokio::test]
    async fn test_should_keep_one_pair_when_linked_twice() {
        let (repos, svc, book, customer) = fixture().await;

        assert!(svc.add_customer_to_book(book.book_id, customer.customer_id.as_str()).await.expect("should link"));
        assert!(svc.add_customer_to_book(book.book_id, customer.customer_id.as_str()).await.expect("should link"));
        assert!(svc.add_book_to_customer(customer.customer_id.as_str(), book.book_id).await.expect("should link"));

        assert_eq!(1, repos.checkouts.load_all().await.expect("should load").len());
        assert_eq!(1, svc.customers_of_book(book.book_id).await.expect("should list customers").len());
        assert_eq!(1, svc.books_of_customer(customer.customer_id.as_str()).await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_not_link_missing_book() {
        let (repos, svc, _book, customer) = fixture().await;

        assert!(!svc.add_customer_to_book(999_999, customer.customer_id.as_str()).await.expect("should not fail"));
        assert!(!svc.add_book_to_customer(customer.customer_id.as_str(), 999_999).await.expect("should not fail"));

        assert!(repos.checkouts.load_all().await.expect("should load").is_empty());
        assert!(svc.books_of_customer(customer.customer_id.as_str()).await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_link_missing_customer() {
        let (repos, svc, book, _customer) = fixture().await;

        assert!(!svc.add_customer_to_book(book.book_id, "no-such-customer").await.expect("should not fail"));
        assert!(repos.checkouts.load_all().await.expect("should load").is_empty());
        assert!(svc.customers_of_book(book.book_id).await.expect("should list customers").is_empty());
    }

    #[tokio::test]
    async fn test_should_keep_existing_link_record() {
        let (repos, svc, book, customer) = fixture().await;
        let other = BookEntity::new(43, "Learning Go", "Bodner", "idiomatic");
        repos.books.save(&other).await.expect("should save book");

        assert!(svc.add_book_to_customer(customer.customer_id.as_str(), book.book_id).await.expect("should link"));
        assert!(svc.add_book_to_customer(customer.customer_id.as_str(), other.book_id).await.expect("should link"));
        let key = CheckoutEntity::key(book.book_id, customer.customer_id.as_str());
        let first = repos.checkouts.get(key.as_str()).await.expect("should load link");

        assert!(svc.add_customer_to_book(book.book_id, customer.customer_id.as_str()).await.expect("should link"));
        assert_eq!(first, repos.checkouts.get(key.as_str()).await.expect("should load link"));
        let books = svc.books_of_customer(customer.customer_id.as_str()).await.expect("should list books");
        assert_eq!(vec![book.book_id, other.book_id], books.iter().map(|b| b.book_id).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_should_not_link_when_both_missing() {
        let (repos, svc, _book, _customer) = fixture().await;

        assert!(!svc.add_customer_to_book(999_999, "no-such-customer").await.expect("should not fail"));
        assert!(!svc.add_book_to_customer("no-such-customer", 999_999).await.expect("should not fail"));
        assert!(repos.checkouts.load_all().await.expect("should load").is_empty());
    }

    #[tokio::test]
    async fn test_should_skip_removed_endpoints() {
        let (repos, svc, book, customer) = fixture().await;

        assert!(svc.add_customer_to_book(book.book_id, customer.customer_id.as_str()).await.expect("should link"));
        repos.customers.delete(customer.customer_id.as_str()).await.expect("should delete customer");

        assert!(svc.customers_of_book(book.book_id).await.expect("should list customers").is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_views_of_missing_entities() {
        let (_repos, svc, _book, _customer) = fixture().await;

        assert!(svc.customers_of_book(999_999).await.expect_err("should fail").is_not_found());
        assert!(svc.books_of_customer("no-such-customer").await.expect_err("should fail").is_not_found());
    }
}
