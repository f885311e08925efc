use axum_helpers::{TokenIssuer, TokenPayload};

use super::UseCaseResult;
use crate::either::{left, right};
use crate::error::{AccountError, DomainError};
use crate::models::AccessToken;
use crate::password::{PasswordHasher, UNKNOWN_ACCOUNT_HASH};
use crate::repository::AccountRepository;

/// Exchanges an email and password for an access token.
///
/// An unknown email and a wrong password produce the same `Left` after the
/// same amount of hashing work, so a caller cannot tell which accounts exist.
pub struct SignInUseCase<'a, R: ?Sized, H: ?Sized, T: ?Sized> {
    repository: &'a R,
    hasher: &'a H,
    tokens: &'a T,
}

impl<'a, R, H, T> SignInUseCase<'a, R, H, T>
where
    R: AccountRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    T: TokenIssuer + ?Sized,
{
    pub fn new(repository: &'a R, hasher: &'a H, tokens: &'a T) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, email: &str, password: &str) -> UseCaseResult<AccessToken> {
        let Some(account) = self.repository.get_by_email(email).await? else {
            self.hasher.compare(password, UNKNOWN_ACCOUNT_HASH).await?;
            return Ok(left(DomainError::email_or_password_incorrect()));
        };

        if !self.hasher.compare(password, &account.password).await? {
            return Ok(left(DomainError::email_or_password_incorrect()));
        }

        let payload = TokenPayload {
            sub: account.id.to_string(),
            email: account.email,
        };

        let access_token = self
            .tokens
            .sign(&payload)
            .map_err(|e| AccountError::Token(e.to_string()))?;

        tracing::debug!(account_id = %account.id, "Issued access token");
        Ok(right(AccessToken { access_token }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::either::Either;
    use crate::error::EMAIL_OR_PASSWORD_INCORRECT;
    use crate::models::Account;
    use crate::password::MockPasswordHasher;
    use crate::repository::MockAccountRepository;
    use axum::http::StatusCode;
    use axum_helpers::TokenClaims;

    mockall::mock! {
        Tokens {}

        impl TokenIssuer for Tokens {
            fn sign(&self, payload: &TokenPayload) -> eyre::Result<String>;
            fn verify(&self, token: &str) -> eyre::Result<TokenClaims>;
        }
    }

    fn stored_account() -> Account {
        Account::new(
            "test@mail.com".to_string(),
            "Test".to_string(),
            "Test".to_string(),
            "$argon2id$stored".to_string(),
        )
    }

    #[tokio::test]
    async fn test_valid_credentials_issue_token_for_account() {
        let account = stored_account();
        let expected_sub = account.id.to_string();

        let mut repo = MockAccountRepository::new();
        let found = account.clone();
        repo.expect_get_by_email()
            .withf(|email| email == "test@mail.com")
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_compare()
            .withf(|password, hash| password == "password" && hash == "$argon2id$stored")
            .times(1)
            .returning(|_, _| Ok(true));

        let mut tokens = MockTokens::new();
        tokens
            .expect_sign()
            .withf(move |payload| payload.sub == expected_sub && payload.email == "test@mail.com")
            .times(1)
            .returning(|_| Ok("signed.jwt.token".to_string()));

        let result = SignInUseCase::new(&repo, &hasher, &tokens)
            .execute("test@mail.com", "password")
            .await
            .unwrap();

        assert_eq!(
            result,
            Either::Right(AccessToken {
                access_token: "signed.jwt.token".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_unknown_email_compares_against_placeholder_hash_without_signing() {
        let mut repo = MockAccountRepository::new();
        repo.expect_get_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_compare()
            .withf(|password, hash| password == "password" && hash == UNKNOWN_ACCOUNT_HASH)
            .times(1)
            .returning(|_, _| Ok(false));

        let mut tokens = MockTokens::new();
        tokens.expect_sign().never();

        let result = SignInUseCase::new(&repo, &hasher, &tokens)
            .execute("nobody@mail.com", "password")
            .await
            .unwrap();

        let err = result.left_value().unwrap();
        assert_eq!(err.message, EMAIL_OR_PASSWORD_INCORRECT);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_password_is_left_without_signing() {
        let account = stored_account();
        let mut repo = MockAccountRepository::new();
        repo.expect_get_by_email()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_compare()
            .times(1)
            .returning(|_, _| Ok(false));

        let mut tokens = MockTokens::new();
        tokens.expect_sign().never();

        let result = SignInUseCase::new(&repo, &hasher, &tokens)
            .execute("test@mail.com", "wrong-password")
            .await
            .unwrap();

        assert!(result.is_left());
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let account = stored_account();
        let mut repo = MockAccountRepository::new();
        repo.expect_get_by_email()
            .withf(|email| email == "test@mail.com")
            .returning(move |_| Ok(Some(account.clone())));
        repo.expect_get_by_email()
            .withf(|email| email != "test@mail.com")
            .returning(|_| Ok(None));

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_compare().times(2).returning(|_, _| Ok(false));

        let tokens = MockTokens::new();
        let use_case = SignInUseCase::new(&repo, &hasher, &tokens);

        let wrong_password = use_case.execute("test@mail.com", "nope").await.unwrap();
        let unknown_email = use_case.execute("ghost@mail.com", "nope").await.unwrap();

        assert_eq!(wrong_password, unknown_email);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates_as_err() {
        let mut repo = MockAccountRepository::new();
        repo.expect_get_by_email()
            .returning(|_| Err(AccountError::Internal("connection reset".to_string())));

        let hasher = MockPasswordHasher::new();
        let tokens = MockTokens::new();

        let result = SignInUseCase::new(&repo, &hasher, &tokens)
            .execute("test@mail.com", "password")
            .await;

        assert!(matches!(result, Err(AccountError::Internal(_))));
    }

    #[tokio::test]
    async fn test_signing_failure_propagates_as_err() {
        let account = stored_account();
        let mut repo = MockAccountRepository::new();
        repo.expect_get_by_email()
            .returning(move |_| Ok(Some(account.clone())));

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_compare().returning(|_, _| Ok(true));

        let mut tokens = MockTokens::new();
        tokens
            .expect_sign()
            .returning(|_| Err(eyre::eyre!("bad key")));

        let result = SignInUseCase::new(&repo, &hasher, &tokens)
            .execute("test@mail.com", "password")
            .await;

        assert!(matches!(result, Err(AccountError::Token(_))));
    }
}
