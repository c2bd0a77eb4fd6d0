//! Account management handlers.
//!
//! No caller identity is checked: any client may update or delete any
//! account id.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};

use orglead_types::user::{
    AccountResponse, CreateAccountRequest, LoginRequest, UserId, messages,
};

use crate::http::error::{AccountOperation, AppError};
use crate::state::AppState;

/// POST /user/create - Create a new account.
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    let Json(body) = payload?;

    let user = state
        .account_service
        .create(body)
        .await
        .map_err(AppError::account(AccountOperation::Create))?;

    Ok(Json(AccountResponse::with_user(messages::CREATED, &user)))
}

/// POST /user/login - Check an email/password pair.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    let Json(body) = payload?;

    let user = state
        .account_service
        .login(body)
        .await
        .map_err(AppError::account(AccountOperation::Login))?;

    Ok(Json(AccountResponse::with_user(messages::LOGGED_IN, &user)))
}

/// PUT /user/update/{id} - Overwrite every field of an account.
pub async fn update_account(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    let Path(id) = id?;
    let Json(body) = payload?;

    let user = state
        .account_service
        .update(id, body)
        .await
        .map_err(AppError::account(AccountOperation::Update))?;

    Ok(Json(AccountResponse::with_user(messages::UPDATED, &user)))
}

/// DELETE /user/delete/{id} - Permanently delete an account.
pub async fn delete_account(
    State(state): State<AppState>,
    id: Result<Path<UserId>, PathRejection>,
) -> Result<Json<AccountResponse>, AppError> {
    let Path(id) = id?;

    state
        .account_service
        .delete(id)
        .await
        .map_err(AppError::account(AccountOperation::Delete))?;

    Ok(Json(AccountResponse::message_only(messages::DELETED)))
}
