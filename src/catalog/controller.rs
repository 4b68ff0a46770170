use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::info;
use crate::auth::context::AuthContext;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchBooksCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::checkout::command::customers_of_book_cmd::{CustomersOfBookCommand, CustomersOfBookCommandRequest, CustomersOfBookCommandResponse};
use crate::checkout::command::link_customer_to_book_cmd::{LinkCustomerToBookCommand, LinkCustomerToBookCommandRequest, LinkCustomerToBookCommandResponse};
use crate::checkout::factory::create_checkout_service;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, &state.repos)
}

pub async fn welcome() -> &'static str {
    "Welcome to the library catalog"
}

pub async fn add_book(
    State(state): State<AppState>,
    auth: AuthContext,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    info!(principal = auth.principal.as_str(), book_id = res.book.book_id, "add book");
    Ok(Json(res))
}

pub async fn find_all_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(build_service(&state)).execute(ListBooksCommandRequest {}).await?;
    Ok(Json(res))
}

pub async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let res = GetBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn update_book(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(book_id): Path<i64>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.book_id = book_id;
    info!(principal = auth.principal.as_str(), book_id, "update book");
    let res = UpdateBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(book_id): Path<i64>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    info!(principal = auth.principal.as_str(), book_id, "remove book");
    let req = RemoveBookCommandRequest { book_id };
    let res = RemoveBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn search_books(
    State(state): State<AppState>,
    Path(keyword): Path<String>) -> Result<Json<SearchBooksCommandResponse>, ServerError> {
    let req = SearchBooksCommandRequest { keyword };
    let res = SearchBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn link_customer_to_book(
    State(state): State<AppState>,
    auth: AuthContext,
    Path((book_id, customer_id)): Path<(i64, String)>) -> Result<Json<LinkCustomerToBookCommandResponse>, ServerError> {
    info!(principal = auth.principal.as_str(), book_id, customer_id = customer_id.as_str(), "link customer to book");
    let req = LinkCustomerToBookCommandRequest { book_id, customer_id };
    let svc = create_checkout_service(&state.config, &state.repos);
    let res = LinkCustomerToBookCommand::new(svc).execute(req).await?;
    if !res.linked {
        return Err((StatusCode::BAD_REQUEST, "book or customer does not exist".to_string()));
    }
    Ok(Json(res))
}

pub async fn find_customers_of_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>) -> Result<Json<CustomersOfBookCommandResponse>, ServerError> {
    let req = CustomersOfBookCommandRequest { book_id };
    let svc = create_checkout_service(&state.config, &state.repos);
    let res = CustomersOfBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
