use super::UseCaseResult;
use crate::either::{left, right};
use crate::error::{AccountError, DomainError};
use crate::models::{Account, AccountKind, AccountResponse, CreateAccount};
use crate::password::PasswordHasher;
use crate::repository::AccountRepository;

/// Registers a new account with a hashed password.
pub struct CreateAccountUseCase<'a, R: ?Sized, H: ?Sized> {
    kind: AccountKind,
    repository: &'a R,
    hasher: &'a H,
}

impl<'a, R, H> CreateAccountUseCase<'a, R, H>
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

    pub async fn execute(&self, input: CreateAccount) -> UseCaseResult<AccountResponse> {
        if self.repository.get_by_email(&input.email).await?.is_some() {
            return Ok(left(DomainError::already_exists(self.kind)));
        }

        let password_hash = self.hasher.hash(&input.password).await?;
        let account = Account::new(input.email, input.first_name, input.last_name, password_hash);

        match self.repository.create(account).await {
            Ok(created) => Ok(right(created.into())),
            // Lost a race with a concurrent registration
            Err(AccountError::DuplicateEmail(_)) => Ok(left(DomainError::already_exists(self.kind))),
            Err(e) => Err(e),
        }
    }
}
