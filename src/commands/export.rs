//! Export command handler.

use crate::args::ExportArgs;
use crate::commands::Out;
use crate::{utils, Home, Result, Store};
use anyhow::Context;

/// Writes the ledger as CSV with `id,label,amount,category` columns, to a
/// file when `--file` is given and to stdout otherwise.
pub async fn export(home: &Home, args: ExportArgs) -> Result<Out<usize>> {
    let store = Store::new(home);
    let ledger = store.load().await?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for transaction in ledger.transactions() {
        writer
            .serialize(transaction)
            .context("Unable to serialize a transaction to CSV")?;
    }
    let data = writer.into_inner().context("Unable to finish the CSV")?;

    let count = ledger.len();
    let message = match args.file() {
        Some(path) => {
            utils::write(path, &data).await?;
            format!(
                "Exported {} transaction{} to {}",
                count,
                if count == 1 { "" } else { "s" },
                path.display()
            )
        }
        None => {
            print!("{}", String::from_utf8_lossy(&data));
            format!(
                "Exported {} transaction{} to stdout",
                count,
                if count == 1 { "" } else { "s" }
            )
        }
    };
    Ok(Out::new(message, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_export_to_file() {
        let env = TestEnv::new().await;
        env.seed(&[
            (1, "Salary", "2000", "Work"),
            (2, "Groceries", "-120.50", "Food"),
        ])
        .await;
        let path = env.home().root().join("out.csv");

        let out = export(env.home(), ExportArgs::new(Some(path.clone())))
            .await
            .unwrap();

        assert!(out.message().contains("Exported 2 transactions"));
        let csv = tokio::fs::read_to_string(&path).await.unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,label,amount,category"));
        assert_eq!(lines.next(), Some("1,Salary,2000,Work"));
        assert_eq!(lines.next(), Some("2,Groceries,-120.50,Food"));
    }

    #[tokio::test]
    async fn test_export_empty_ledger() {
        let env = TestEnv::new().await;
        let path = env.home().root().join("out.csv");

        let out = export(env.home(), ExportArgs::new(Some(path.clone())))
            .await
            .unwrap();

        assert!(out.message().contains("Exported 0 transactions"));
    }
}
