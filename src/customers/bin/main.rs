use axum::{
    routing::{get, put},
    Router,
};
use lambda_http::{run, Error};
use lms_catalog::core::controller::AppState;
use lms_catalog::core::domain::Configuration;
use lms_catalog::customers::controller::{add_customer, find_all_customers, find_books_of_customer, find_customer_by_id, link_book_to_customer, remove_customer, update_customer};
use lms_catalog::utils::logs::setup_tracing;

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
        .route("/customers", get(find_all_customers).post(add_customer))
        .route("/customers/:customer_id",
               get(find_customer_by_id).put(update_customer).delete(remove_customer))
        .route("/customers/:customer_id/books", get(find_books_of_customer))
        .route("/customers/:customer_id/books/:book_id", put(link_book_to_customer))
        .with_state(state);

    run(app).await
}
