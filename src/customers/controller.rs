use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::info;
use crate::auth::context::AuthContext;
use crate::checkout::command::books_of_customer_cmd::{BooksOfCustomerCommand, BooksOfCustomerCommandRequest, BooksOfCustomerCommandResponse};
use crate::checkout::command::link_book_to_customer_cmd::{LinkBookToCustomerCommand, LinkBookToCustomerCommandRequest, LinkBookToCustomerCommandResponse};
use crate::checkout::factory::create_checkout_service;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::customers::command::add_customer_cmd::{AddCustomerCommand, AddCustomerCommandRequest, AddCustomerCommandResponse};
use crate::customers::command::get_customer_cmd::{GetCustomerCommand, GetCustomerCommandRequest, GetCustomerCommandResponse};
use crate::customers::command::list_customers_cmd::{ListCustomersCommand, ListCustomersCommandRequest, ListCustomersCommandResponse};
use crate::customers::command::remove_customer_cmd::{RemoveCustomerCommand, RemoveCustomerCommandRequest, RemoveCustomerCommandResponse};
use crate::customers::command::update_customer_cmd::{UpdateCustomerCommand, UpdateCustomerCommandRequest, UpdateCustomerCommandResponse};
use crate::customers::domain::CustomerService;
use crate::customers::factory;

fn build_service(state: &AppState) -> Box<dyn CustomerService> {
    factory::create_customer_service(&state.config, &state.repos)
}

pub async fn add_customer(
    State(state): State<AppState>,
    auth: AuthContext,
    json: Json<Value>) -> Result<Json<AddCustomerCommandResponse>, ServerError> {
    let req: AddCustomerCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddCustomerCommand::new(build_service(&state)).execute(req).await?;
    info!(principal = auth.principal.as_str(), customer_id = res.customer.customer_id.as_str(), "add customer");
    Ok(Json(res))
}

pub async fn find_all_customers(
    State(state): State<AppState>) -> Result<Json<ListCustomersCommandResponse>, ServerError> {
    let res = ListCustomersCommand::new(build_service(&state)).execute(ListCustomersCommandRequest {}).await?;
    Ok(Json(res))
}

pub async fn find_customer_by_id(
    State(state): State<AppState>,
    Path(customer_id): Path<String>) -> Result<Json<GetCustomerCommandResponse>, ServerError> {
    let req = GetCustomerCommandRequest { customer_id };
    let res = GetCustomerCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn update_customer(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(customer_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateCustomerCommandResponse>, ServerError> {
    let mut req: UpdateCustomerCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.customer_id = customer_id;
    info!(principal = auth.principal.as_str(), customer_id = req.customer_id.as_str(), "update customer");
    let res = UpdateCustomerCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_customer(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(customer_id): Path<String>) -> Result<Json<RemoveCustomerCommandResponse>, ServerError> {
    info!(principal = auth.principal.as_str(), customer_id = customer_id.as_str(), "remove customer");
    let req = RemoveCustomerCommandRequest { customer_id };
    let res = RemoveCustomerCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn link_book_to_customer(
    State(state): State<AppState>,
    auth: AuthContext,
    Path((customer_id, book_id)): Path<(String, i64)>) -> Result<Json<LinkBookToCustomerCommandResponse>, ServerError> {
    info!(principal = auth.principal.as_str(), customer_id = customer_id.as_str(), book_id, "link book to customer");
    let req = LinkBookToCustomerCommandRequest { customer_id, book_id };
    let svc = create_checkout_service(&state.config, &state.repos);
    let res = LinkBookToCustomerCommand::new(svc).execute(req).await?;
    if !res.linked {
        return Err((StatusCode::BAD_REQUEST, "customer or book does not exist".to_string()));
    }
    Ok(Json(res))
}

pub async fn find_books_of_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>) -> Result<Json<BooksOfCustomerCommandResponse>, ServerError> {
    let req = BooksOfCustomerCommandRequest { customer_id };
    let svc = create_checkout_service(&state.config, &state.repos);
    let res = BooksOfCustomerCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}
