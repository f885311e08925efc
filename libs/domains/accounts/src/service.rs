use axum_helpers::TokenIssuer;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{
    AccessToken, AccountFilter, AccountKind, AccountResponse, CreateAccount, UpdateAccount,
};
use crate::password::PasswordHasher;
use crate::repository::AccountRepository;
use crate::use_cases::{
    CreateAccountUseCase, DeleteAccountUseCase, ReadAccountUseCase, ReadAccountsUseCase,
    SignInUseCase, UpdateAccountUseCase, UseCaseResult,
};

/// CRUD entry point for one account kind.
///
/// Cheap to clone; collaborators are shared through `Arc`. Each call builds
/// the matching use case over borrowed collaborators.
pub struct AccountService<R: ?Sized, H: ?Sized> {
    kind: AccountKind,
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: ?Sized, H: ?Sized> Clone for AccountService<R, H> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<R, H> AccountService<R, H>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    pub fn new(kind: AccountKind, repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            kind,
            repository,
            hasher,
        }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub async fn create(&self, input: CreateAccount) -> UseCaseResult<AccountResponse> {
        CreateAccountUseCase::new(self.kind, &*self.repository, &*self.hasher)
            .execute(input)
            .await
    }

    pub async fn get(&self, id: Uuid) -> UseCaseResult<AccountResponse> {
        ReadAccountUseCase::new(self.kind, &*self.repository)
            .execute(id)
            .await
    }

    pub async fn list(&self, filter: AccountFilter) -> UseCaseResult<Vec<AccountResponse>> {
        ReadAccountsUseCase::new(self.kind, &*self.repository)
            .execute(filter)
            .await
    }

    pub async fn update(&self, id: Uuid, input: UpdateAccount) -> UseCaseResult<AccountResponse> {
        UpdateAccountUseCase::new(self.kind, &*self.repository, &*self.hasher)
            .execute(id, input)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> UseCaseResult<bool> {
        DeleteAccountUseCase::new(self.kind, &*self.repository)
            .execute(id)
            .await
    }
}

/// Sign-in against a single account store.
pub struct AuthService<R: ?Sized, H: ?Sized, T: ?Sized> {
    repository: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R: ?Sized, H: ?Sized, T: ?Sized> Clone for AuthService<R, H, T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: Arc::clone(&self.hasher),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<R, H, T> AuthService<R, H, T>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(repository: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> UseCaseResult<AccessToken> {
        SignInUseCase::new(&*self.repository, &*self.hasher, &*self.tokens)
            .execute(email, password)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::Argon2PasswordHasher;
    use crate::repository::InMemoryAccountRepository;
    use axum_helpers::{JwtAuth, JwtConfig};

    fn service() -> AccountService<dyn AccountRepository, dyn PasswordHasher> {
        let repository: Arc<dyn AccountRepository> =
            Arc::new(InMemoryAccountRepository::new(AccountKind::Customer));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
        AccountService::new(AccountKind::Customer, repository, hasher)
    }

    fn create_input() -> CreateAccount {
        CreateAccount {
            email: "test@mail.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "Test".to_string(),
            password: "password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_clones_share_the_same_store() {
        let service = service();
        let clone = service.clone();

        let created = service
            .create(create_input())
            .await
            .unwrap()
            .right_value()
            .unwrap();

        let found = clone.get(created.id).await.unwrap().right_value().unwrap();
        assert_eq!(found, created);
        assert_eq!(clone.kind(), AccountKind::Customer);
    }

    #[tokio::test]
    async fn test_sign_in_with_real_hasher_and_tokens() {
        let repository = Arc::new(InMemoryAccountRepository::new(AccountKind::Customer));
        let hasher = Arc::new(Argon2PasswordHasher::new());
        let tokens = Arc::new(JwtAuth::new(
            &JwtConfig::new("a-test-secret-that-is-long-enough-123").unwrap(),
        ));

        let accounts = AccountService::new(AccountKind::Customer, repository.clone(), hasher.clone());
        let created = accounts
            .create(create_input())
            .await
            .unwrap()
            .right_value()
            .unwrap();

        let auth = AuthService::new(repository, hasher, tokens.clone());

        let token = auth
            .sign_in("test@mail.com", "password")
            .await
            .unwrap()
            .right_value()
            .unwrap();
        let claims = tokens.verify(&token.access_token).unwrap();
        assert_eq!(claims.sub, created.id.to_string());
        assert_eq!(claims.email, "test@mail.com");

        let wrong = auth
            .sign_in("test@mail.com", "not-the-password")
            .await
            .unwrap();
        let unknown = auth.sign_in("nobody@mail.com", "password").await.unwrap();
        assert_eq!(wrong.left_value(), unknown.left_value());
    }
}
