use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// The two account populations. Both share one shape; the kind picks the
/// table and the noun used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    User,
    Customer,
}

impl AccountKind {
    /// Singular noun as it appears in messages ("Customer").
    pub fn noun(&self) -> &'static str {
        match self {
            AccountKind::User => "User",
            AccountKind::Customer => "Customer",
        }
    }

    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            AccountKind::User => "users",
            AccountKind::Customer => "customers",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountKind::User => write!(f, "user"),
            AccountKind::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" | "users" => Ok(AccountKind::User),
            "customer" | "customers" => Ok(AccountKind::Customer),
            _ => Err(format!("Unknown account kind: {}", s)),
        }
    }
}

/// Account entity - matches SQL schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    /// Unique per kind, compared case-insensitively
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 PHC string (never exposed in API responses)
    #[serde(skip_serializing, default)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account (password must already be hashed)
    pub fn new(email: String, first_name: String, last_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            first_name,
            last_name,
            password: password_hash,
            created_at: Utc::now(),
        }
    }

    /// Apply updates (password should already be hashed if provided)
    pub fn apply_update(&mut self, update: UpdateAccount, new_password_hash: Option<String>) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(hash) = new_password_hash {
            self.password = hash;
        }
    }
}

/// Account response DTO (without password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            created_at: account.created_at,
        }
    }
}

/// DTO for creating an account
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    #[validate(email(message = "Invalid email format"), length(max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

/// DTO for updating an account; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccount {
    #[validate(email(message = "Invalid email format"), length(max = 255))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: Option<String>,
}

/// Exact-match query filters for listing accounts
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFilter {
    pub id: Option<Uuid>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AccountFilter {
    pub fn matches(&self, account: &Account) -> bool {
        self.id.is_none_or(|id| account.id == id)
            && self
                .email
                .as_ref()
                .is_none_or(|email| account.email.eq_ignore_ascii_case(email))
            && self
                .first_name
                .as_ref()
                .is_none_or(|name| &account.first_name == name)
            && self
                .last_name
                .as_ref()
                .is_none_or(|name| &account.last_name == name)
    }
}

/// DTO for sign-in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful sign-in response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}
