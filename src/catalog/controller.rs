use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Json,
};
use serde_json::{Value};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::find_books_cmd::{FindBooksCommand, FindBooksCommandRequest, FindBooksCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_rejection_to_server_error, json_to_server_error, ServerError};

pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(req): Query<ListBooksCommandRequest>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let Json(json) = payload.map_err(json_rejection_to_server_error)?;
    let req: AddBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books(
    State(state): State<AppState>,
    Query(req): Query<FindBooksCommandRequest>) -> Result<Json<FindBooksCommandResponse>, ServerError> {
    let res = FindBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let Json(json) = payload.map_err(json_rejection_to_server_error)?;
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    req.isbn = isbn;
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}
