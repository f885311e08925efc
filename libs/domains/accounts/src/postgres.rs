use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult, Statement, Value};
use uuid::Uuid;

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, AccountFilter, AccountKind};
use crate::repository::AccountRepository;

/// PostgreSQL implementation of AccountRepository using SeaORM.
///
/// One instance serves one table; the kind picks `users` or `customers`.
#[derive(Clone)]
pub struct PostgresAccountRepository {
    db: sea_orm::DatabaseConnection,
    kind: AccountKind,
}

impl PostgresAccountRepository {
    pub fn new(db: sea_orm::DatabaseConnection, kind: AccountKind) -> Self {
        Self { db, kind }
    }

    fn table(&self) -> &'static str {
        self.kind.table()
    }

    fn map_write_error(&self, e: DbErr, email: &str) -> AccountError {
        let err_str = e.to_string();
        if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
            AccountError::DuplicateEmail(email.to_string())
        } else {
            AccountError::Database(e)
        }
    }
}

/// Helper struct for deserializing account rows from the database
#[derive(Debug, FromQueryResult)]
struct AccountRow {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            password: row.password,
            created_at: row.created_at,
        }
    }
}

/// Builds the WHERE clause and bind values for a list filter.
fn filter_clause(filter: &AccountFilter) -> (String, Vec<Value>) {
    let mut conditions = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(id) = filter.id {
        values.push(id.into());
        conditions.push(format!("id = ${}", values.len()));
    }
    if let Some(email) = &filter.email {
        values.push(email.clone().into());
        conditions.push(format!("LOWER(email) = LOWER(${})", values.len()));
    }
    if let Some(first_name) = &filter.first_name {
        values.push(first_name.clone().into());
        conditions.push(format!("first_name = ${}", values.len()));
    }
    if let Some(last_name) = &filter.last_name {
        values.push(last_name.clone().into());
        conditions.push(format!("last_name = ${}", values.len()));
    }

    if conditions.is_empty() {
        (String::new(), values)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), values)
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> AccountResult<Account> {
        let sql = format!(
            r#"
            INSERT INTO {} (id, email, first_name, last_name, password, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
        "#,
            self.table()
        );

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                account.id.into(),
                account.email.clone().into(),
                account.first_name.clone().into(),
                account.last_name.clone().into(),
                account.password.clone().into(),
                account.created_at.into(),
            ],
        );

        let row = AccountRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| self.map_write_error(e, &account.email))?
            .ok_or_else(|| AccountError::Internal("Insert returned no row".to_string()))?;

        tracing::info!(kind = %self.kind, account_id = %row.id, "Created account");
        Ok(row.into())
    }

    async fn get_by_id(&self, id: Uuid) -> AccountResult<Option<Account>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", self.table());

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = AccountRow::find_by_statement(stmt).one(&self.db).await?;

        Ok(row.map(|r| r.into()))
    }

    async fn get_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let sql = format!(
            "SELECT * FROM {} WHERE LOWER(email) = LOWER($1)",
            self.table()
        );

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [email.into()]);

        let row = AccountRow::find_by_statement(stmt).one(&self.db).await?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self, filter: AccountFilter) -> AccountResult<Vec<Account>> {
        let (clause, values) = filter_clause(&filter);
        let sql = format!(
            "SELECT * FROM {}{} ORDER BY created_at DESC",
            self.table(),
            clause
        );

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, values);

        let rows = AccountRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(&self, account: Account) -> AccountResult<Account> {
        let sql = format!(
            r#"
            UPDATE {}
            SET email = $2, first_name = $3, last_name = $4, password = $5
            WHERE id = $1
            RETURNING *
        "#,
            self.table()
        );

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                account.id.into(),
                account.email.clone().into(),
                account.first_name.clone().into(),
                account.last_name.clone().into(),
                account.password.clone().into(),
            ],
        );

        let row = AccountRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| self.map_write_error(e, &account.email))?
            .ok_or_else(|| {
                AccountError::Internal(format!(
                    "{} {} vanished before update",
                    self.kind.noun(),
                    account.id
                ))
            })?;

        tracing::info!(kind = %self.kind, account_id = %row.id, "Updated account");
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> AccountResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table());

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let result = self.db.execute_raw(stmt).await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(kind = %self.kind, account_id = %id, "Deleted account");
        }
        Ok(deleted)
    }
}
