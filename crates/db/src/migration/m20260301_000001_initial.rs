//! Initial database migration.
//!
//! Creates the enums, the accounts table and the transactions table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(ACCOUNTS_SQL).await?;
        db.execute_unprepared(TRANSACTIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE account_role AS ENUM ('admin', 'cashier');
CREATE TYPE transaction_kind AS ENUM ('sale', 'refund', 'void', 'income', 'expense');
";

const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY,
    role account_role NOT NULL,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    secret_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT uq_accounts_role_email UNIQUE (role, email),
    CONSTRAINT chk_accounts_email_lower CHECK (email = lower(email))
);

CREATE INDEX idx_accounts_role_created ON accounts(role, created_at DESC);
";

// No foreign key on owner_id: deleting a cashier keeps their entries.
const TRANSACTIONS_SQL: &str = r"
CREATE TABLE transactions (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL,
    owner_name VARCHAR(255) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    kind transaction_kind NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_transactions_amount_positive CHECK (amount > 0)
);

CREATE INDEX idx_transactions_owner_created ON transactions(owner_id, created_at DESC);
CREATE INDEX idx_transactions_created ON transactions(created_at DESC);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS transactions CASCADE;
DROP TABLE IF EXISTS accounts CASCADE;
DROP TYPE IF EXISTS transaction_kind;
DROP TYPE IF EXISTS account_role;
";
