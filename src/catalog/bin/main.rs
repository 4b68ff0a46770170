use axum::{
    routing::{get, put},
    Router,
};
use lambda_http::{run, Error};
use lms_catalog::catalog::controller::{add_book, find_all_books, find_book_by_id, find_customers_of_book, link_customer_to_book, remove_book, search_books, update_book, welcome};
use lms_catalog::core::controller::AppState;
use lms_catalog::core::domain::Configuration;
use lms_catalog::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();
    let config = Configuration::from_env()?;
    setup_tracing(config.log_level.as_str());

    if config.dev_mode {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }
    let state = AppState::build(config).await?;

    let app = Router::new()
        .route("/", get(welcome))
        .route("/books", get(find_all_books).post(add_book))
        .route("/books/:book_id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/books/:book_id/customers", get(find_customers_of_book))
        .route("/books/:book_id/customers/:customer_id", put(link_customer_to_book))
        .route("/search/:keyword", get(search_books))
        .with_state(state);

    run(app).await
}
