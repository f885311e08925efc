use axum::http::StatusCode;
use uuid::Uuid;

use super::UseCaseResult;
use crate::either::{left, right};
use crate::error::DomainError;
use crate::models::AccountKind;
use crate::repository::AccountRepository;

/// Removes an account, answering whether a row was deleted.
pub struct DeleteAccountUseCase<'a, R: ?Sized> {
    kind: AccountKind,
    repository: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> DeleteAccountUseCase<'a, R> {
    pub fn new(kind: AccountKind, repository: &'a R) -> Self {
        Self { kind, repository }
    }

    pub async fn execute(&self, id: Uuid) -> UseCaseResult<bool> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Ok(left(DomainError::does_not_exist(
                self.kind,
                StatusCode::BAD_REQUEST,
            )));
        }

        let deleted = self.repository.delete(id).await?;
        Ok(right(deleted))
    }
}
