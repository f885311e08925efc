use axum::http::StatusCode;
use uuid::Uuid;

use super::UseCaseResult;
use crate::either::{left, right};
use crate::error::{AccountError, DomainError};
use crate::models::{AccountKind, AccountResponse, UpdateAccount};
use crate::password::PasswordHasher;
use crate::repository::AccountRepository;

/// Applies a partial update; a new password is hashed before it is stored.
pub struct UpdateAccountUseCase<'a, R: ?Sized, H: ?Sized> {
    kind: AccountKind,
    repository: &'a R,
    hasher: &'a H,
}

impl<'a, R, H> UpdateAccountUseCase<'a, R, H>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    pub fn new(kind: AccountKind, repository: &'a R, hasher: &'a H) -> Self {
        Self {
            kind,
            repository,
            hasher,
        }
    }

    pub async fn execute(&self, id: Uuid, input: UpdateAccount) -> UseCaseResult<AccountResponse> {
        let Some(mut account) = self.repository.get_by_id(id).await? else {
            return Ok(left(DomainError::does_not_exist(
                self.kind,
                StatusCode::BAD_REQUEST,
            )));
        };

        if let Some(new_email) = &input.email {
            if !new_email.eq_ignore_ascii_case(&account.email) {
                let taken = self
                    .repository
                    .get_by_email(new_email)
                    .await?
                    .is_some_and(|other| other.id != account.id);
                if taken {
                    return Ok(left(DomainError::already_exists(self.kind)));
                }
            }
        }

        let new_password_hash = match &input.password {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        account.apply_update(input, new_password_hash);

        match self.repository.update(account).await {
            Ok(updated) => Ok(right(updated.into())),
            Err(AccountError::DuplicateEmail(_)) => Ok(left(DomainError::already_exists(self.kind))),
            Err(e) => Err(e),
        }
    }
}
