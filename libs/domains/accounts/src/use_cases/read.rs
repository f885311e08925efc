use axum::http::StatusCode;
use uuid::Uuid;

use super::UseCaseResult;
use crate::either::{left, right};
use crate::error::DomainError;
use crate::models::{AccountFilter, AccountKind, AccountResponse};
use crate::repository::AccountRepository;

/// Fetches one account by id.
pub struct ReadAccountUseCase<'a, R: ?Sized> {
    kind: AccountKind,
    repository: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> ReadAccountUseCase<'a, R> {
    pub fn new(kind: AccountKind, repository: &'a R) -> Self {
        Self { kind, repository }
    }

    pub async fn execute(&self, id: Uuid) -> UseCaseResult<AccountResponse> {
        match self.repository.get_by_id(id).await? {
            Some(account) => Ok(right(account.into())),
            None => Ok(left(DomainError::does_not_exist(
                self.kind,
                StatusCode::NOT_FOUND,
            ))),
        }
    }
}

/// Lists accounts matching a filter. An empty result is a `Left`.
pub struct ReadAccountsUseCase<'a, R: ?Sized> {
    kind: AccountKind,
    repository: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> ReadAccountsUseCase<'a, R> {
    pub fn new(kind: AccountKind, repository: &'a R) -> Self {
        Self { kind, repository }
    }

    pub async fn execute(&self, filter: AccountFilter) -> UseCaseResult<Vec<AccountResponse>> {
        let accounts = self.repository.list(filter).await?;

        if accounts.is_empty() {
            return Ok(left(DomainError::none_found(self.kind)));
        }

        Ok(right(accounts.into_iter().map(Into::into).collect()))
    }
}
