//! `SeaORM` active enums mirroring the Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_role")]
pub enum AccountRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "cashier")]
    Cashier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_kind")]
pub enum TransactionKind {
    #[sea_orm(string_value = "sale")]
    Sale,
    #[sea_orm(string_value = "refund")]
    Refund,
    #[sea_orm(string_value = "void")]
    Void,
    #[sea_orm(string_value = "income")]
    Income,
    #[sea_orm(string_value = "expense")]
    Expense,
}
