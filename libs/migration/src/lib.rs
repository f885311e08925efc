pub use sea_orm_migration::prelude::*;

mod m20251101_000000_create_accounts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251101_000000_create_accounts::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_registered() {
        assert_eq!(Migrator::migrations().len(), 1);
    }
}
