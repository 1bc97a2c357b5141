//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::{utils, Home, Result, Store};
use anyhow::bail;

/// Records a new transaction and mirrors the ledger back to the store.
///
/// A random integer ID is generated for the record. IDs are not guaranteed to
/// be unique; `remove` acts on every record carrying the same ID.
///
/// # Errors
///
/// - Returns an error if the label is blank.
/// - Returns an error if the store cannot be read or written.
pub async fn add(home: &Home, args: AddArgs) -> Result<Out<Transaction>> {
    if args.label().trim().is_empty() {
        bail!("Please add a label and amount");
    }

    let store = Store::new(home);
    let mut ledger = store.load().await?;

    let transaction = Transaction::new(
        utils::generate_id(),
        args.label().trim(),
        args.amount(),
        args.category(),
    );
    ledger.push(transaction.clone());
    store.save(&ledger).await?;

    let message = format!(
        "Added transaction {}: {} {} [{}]",
        transaction.id(),
        transaction.label(),
        transaction.amount(),
        transaction.category()
    );
    Ok(Out::new(message, transaction))
}
