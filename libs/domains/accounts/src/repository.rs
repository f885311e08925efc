use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, AccountFilter, AccountKind};

/// Repository trait for Account persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account. Fails with `DuplicateEmail` if the email is taken.
    async fn create(&self, account: Account) -> AccountResult<Account>;

    async fn get_by_id(&self, id: Uuid) -> AccountResult<Option<Account>>;

    /// Case-insensitive email lookup
    async fn get_by_email(&self, email: &str) -> AccountResult<Option<Account>>;

    /// List accounts matching every present filter field, newest first
    async fn list(&self, filter: AccountFilter) -> AccountResult<Vec<Account>>;

    /// Replace a stored account
    async fn update(&self, account: Account) -> AccountResult<Account>;

    /// Delete by ID, reporting whether a row was removed
    async fn delete(&self, id: Uuid) -> AccountResult<bool>;
}

#[async_trait]
impl<R: AccountRepository + ?Sized> AccountRepository for Arc<R> {
    async fn create(&self, account: Account) -> AccountResult<Account> {
        (**self).create(account).await
    }

    async fn get_by_id(&self, id: Uuid) -> AccountResult<Option<Account>> {
        (**self).get_by_id(id).await
    }

    async fn get_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        (**self).get_by_email(email).await
    }

    async fn list(&self, filter: AccountFilter) -> AccountResult<Vec<Account>> {
        (**self).list(filter).await
    }

    async fn update(&self, account: Account) -> AccountResult<Account> {
        (**self).update(account).await
    }

    async fn delete(&self, id: Uuid) -> AccountResult<bool> {
        (**self).delete(id).await
    }
}

/// In-memory implementation of AccountRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryAccountRepository {
    kind: AccountKind,
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new(kind: AccountKind) -> Self {
        Self {
            kind,
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> AccountResult<Account> {
        let mut accounts = self.accounts.write().await;

        let email_taken = accounts
            .values()
            .any(|a| a.email.eq_ignore_ascii_case(&account.email));
        if email_taken {
            return Err(AccountError::DuplicateEmail(account.email));
        }

        accounts.insert(account.id, account.clone());

        tracing::info!(kind = %self.kind, account_id = %account.id, "Created account");
        Ok(account)
    }

    async fn get_by_id(&self, id: Uuid) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned();
        Ok(account)
    }

    async fn list(&self, filter: AccountFilter) -> AccountResult<Vec<Account>> {
        let accounts = self.accounts.read().await;

        let mut result: Vec<Account> = accounts
            .values()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();

        // Sort by created_at descending (newest first)
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn update(&self, account: Account) -> AccountResult<Account> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(AccountError::Internal(format!(
                "{} {} vanished before update",
                self.kind.noun(),
                account.id
            )));
        }

        let email_taken = accounts
            .values()
            .any(|a| a.id != account.id && a.email.eq_ignore_ascii_case(&account.email));
        if email_taken {
            return Err(AccountError::DuplicateEmail(account.email));
        }

        accounts.insert(account.id, account.clone());

        tracing::info!(kind = %self.kind, account_id = %account.id, "Updated account");
        Ok(account)
    }

    async fn delete(&self, id: Uuid) -> AccountResult<bool> {
        let mut accounts = self.accounts.write().await;

        if accounts.remove(&id).is_some() {
            tracing::info!(kind = %self.kind, account_id = %id, "Deleted account");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
