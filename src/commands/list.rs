//! List command handler.

use crate::commands::Out;
use crate::model::{Kind, Transaction};
use crate::{Home, Result, Store};

/// Renders the recorded transactions in order, one row per record: the ID,
/// the label, the signed two-decimal amount and the category tag.
pub async fn list(home: &Home) -> Result<Out<Vec<Transaction>>> {
    let store = Store::new(home);
    let ledger = store.load().await?;

    if ledger.is_empty() {
        return Ok(Out::new(String::from("No transactions yet"), Vec::new()));
    }

    let rows: Vec<String> = ledger.transactions().iter().map(row).collect();
    Ok(Out::new(
        rows.join("\n"),
        ledger.transactions().to_vec(),
    ))
}

/// One rendered row, e.g. `42314159  Groceries  -$120.50  [Food]`. Income
/// rows carry an explicit leading `+`.
fn row(transaction: &Transaction) -> String {
    let amount = transaction.amount();
    let rendered = match transaction.kind() {
        Kind::Expense => amount.to_string(),
        Kind::Income => format!("+{}", amount),
    };
    format!(
        "{:>8}  {}  {}  [{}]",
        transaction.id(),
        transaction.label(),
        rendered,
        transaction.category()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_list_renders_signed_rows() {
        let env = TestEnv::new().await;
        env.seed(&[
            (1, "Salary", "2000", "Work"),
            (2, "Groceries", "-120.50", "Food"),
        ])
        .await;

        let out = list(env.home()).await.unwrap();

        let lines: Vec<&str> = out.message().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Salary  +$2,000.00  [Work]"));
        assert!(lines[1].contains("Groceries  -$120.50  [Food]"));
        assert_eq!(out.structure().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_empty_ledger() {
        let env = TestEnv::new().await;
        let out = list(env.home()).await.unwrap();
        assert_eq!(out.message(), "No transactions yet");
        assert!(out.structure().unwrap().is_empty());
    }
}
