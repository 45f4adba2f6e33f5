//! Account provisioning and demo data seeder for Tillbook.
//!
//! Ensures an administrator exists (from the `bootstrap` config section, or a
//! development default), then seeds a demo cashier with a few transactions.
//! Safe to run repeatedly.
//!
//! Usage: cargo run --bin seeder

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tillbook_core::{
    AccountProfile, DirectoryError, DirectoryService, LedgerService,
    ledger::RecordTransactionInput,
};
use tillbook_db::{AccountRepository, TransactionRepository, connect_with};
use tillbook_shared::{AppConfig, config::BootstrapAdmin};

const DEMO_CASHIER_NAME: &str = "Ada";
const DEMO_CASHIER_EMAIL: &str = "ada@tillbook.dev";
const DEMO_CASHIER_SECRET: &str = "pw123456";

/// Demo ledger for the seeded cashier: balance 500 + 50 - 200 - 20 = 330.
const DEMO_TRANSACTIONS: [(Decimal, &str, &str); 5] = [
    (dec!(500), "sale", "Morning sales"),
    (dec!(50), "income", "Float top-up"),
    (dec!(200), "expense", "Supplies"),
    (dec!(20), "refund", "Returned item"),
    (dec!(15), "void", "Mistyped sale"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;

    let directory = DirectoryService::new(Arc::new(AccountRepository::new(db.clone())));
    let ledger = LedgerService::new(Arc::new(TransactionRepository::new(db)));

    println!("Provisioning administrator...");
    let admin = config.bootstrap.admin().unwrap_or_else(|| {
        println!("  No bootstrap admin configured, using development default");
        BootstrapAdmin {
            email: "admin@tillbook.dev".to_string(),
            name: "Administrator".to_string(),
            secret: "admin12345".to_string(),
        }
    });
    let (account, created) = directory
        .ensure_admin(&admin.name, &admin.email, &admin.secret)
        .await?;
    if created {
        println!("  Created administrator {}", account.email);
    } else {
        println!("  Administrator {} already exists, skipping...", account.email);
    }

    println!("Seeding demo cashier...");
    let Some(cashier) = seed_cashier(&directory).await? else {
        println!("  Demo cashier already exists, skipping transactions...");
        println!("Seeding complete!");
        return Ok(());
    };

    println!("Seeding demo transactions...");
    for (amount, kind, description) in DEMO_TRANSACTIONS {
        ledger
            .record(RecordTransactionInput {
                owner_id: cashier.id,
                owner_name: cashier.name.clone(),
                amount,
                kind: kind.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
    }

    let summary = ledger.summary(Some(cashier.id)).await?;
    println!(
        "  {} transactions, balance {}",
        summary.count, summary.balance
    );

    println!("Seeding complete!");
    Ok(())
}

/// Creates the demo cashier, or returns `None` if it already exists.
async fn seed_cashier(directory: &DirectoryService) -> anyhow::Result<Option<AccountProfile>> {
    match directory
        .create(DEMO_CASHIER_NAME, DEMO_CASHIER_EMAIL, DEMO_CASHIER_SECRET)
        .await
    {
        Ok(cashier) => {
            println!("  Created cashier {}", cashier.email);
            Ok(Some(cashier))
        }
        Err(DirectoryError::DuplicateEmail(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
