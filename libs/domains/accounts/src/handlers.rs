use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{AppError, UuidPath, ValidatedJson};
use serde::Serialize;

use crate::either::Either;
use crate::error::DomainError;
use crate::models::{AccountFilter, CreateAccount, UpdateAccount};
use crate::password::PasswordHasher;
use crate::repository::AccountRepository;
use crate::service::AccountService;

/// CRUD routes for one account kind, meant to be nested under `/users` or
/// `/customers`.
pub fn router<R, H>(service: AccountService<R, H>) -> Router
where
    R: AccountRepository + ?Sized + 'static,
    H: PasswordHasher + ?Sized + 'static,
{
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .with_state(service)
}

/// Turns a use case outcome into a response: `Right` with `status`, `Left`
/// through its own status.
pub(crate) fn respond<T: Serialize>(
    outcome: Either<DomainError, T>,
    status: StatusCode,
) -> Result<Response, AppError> {
    match outcome {
        Either::Left(err) => Err(err.into()),
        Either::Right(value) => Ok((status, Json(value)).into_response()),
    }
}

/// POST /{kind}
async fn create_account<R, H>(
    State(service): State<AccountService<R, H>>,
    ValidatedJson(input): ValidatedJson<CreateAccount>,
) -> Result<Response, AppError>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    respond(service.create(input).await?, StatusCode::CREATED)
}

/// GET /{kind}?email=..&firstName=..
async fn list_accounts<R, H>(
    State(service): State<AccountService<R, H>>,
    Query(filter): Query<AccountFilter>,
) -> Result<Response, AppError>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    respond(service.list(filter).await?, StatusCode::OK)
}

/// GET /{kind}/{id}
async fn get_account<R, H>(
    State(service): State<AccountService<R, H>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    respond(service.get(id).await?, StatusCode::OK)
}

/// PUT /{kind}/{id}
async fn update_account<R, H>(
    State(service): State<AccountService<R, H>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateAccount>,
) -> Result<Response, AppError>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    respond(service.update(id, input).await?, StatusCode::OK)
}

/// DELETE /{kind}/{id}
async fn delete_account<R, H>(
    State(service): State<AccountService<R, H>>,
    UuidPath(id): UuidPath,
) -> Result<Response, AppError>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    respond(service.delete(id).await?, StatusCode::OK)
}
