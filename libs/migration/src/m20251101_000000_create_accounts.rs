use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Both account tables share one shape.
const ACCOUNT_TABLES: [&str; 2] = ["users", "customers"];

fn create_account_table(table: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(pk_uuid(Account::Id))
        .col(string_len(Account::Email, 255))
        .col(string_len(Account::FirstName, 100))
        .col(string_len(Account::LastName, 100))
        .col(string(Account::Password))
        .col(timestamp_with_time_zone(Account::CreatedAt).default(Expr::current_timestamp()))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ACCOUNT_TABLES {
            manager.create_table(create_account_table(table)).await?;

            // Emails are unique per table regardless of case
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    "CREATE UNIQUE INDEX IF NOT EXISTS idx_{table}_email_lower ON {table} (LOWER(email))"
                ))
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(format!("idx_{table}_created_at"))
                        .table(Alias::new(table))
                        .col(Account::CreatedAt)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ACCOUNT_TABLES {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Account {
    Id,
    Email,
    FirstName,
    LastName,
    Password,
    CreatedAt,
}
