//! Remove command handler.

use crate::args::RemoveArgs;
use crate::commands::Out;
use crate::{Home, Result, Store};

/// Removes every transaction whose ID matches and mirrors the ledger back to
/// the store.
///
/// IDs are not unique, so more than one record can go at once. An unknown ID
/// removes nothing and is reported as such, not treated as an error.
pub async fn remove(home: &Home, args: RemoveArgs) -> Result<Out<usize>> {
    let store = Store::new(home);
    let mut ledger = store.load().await?;

    let count = ledger.remove(args.id());
    if count > 0 {
        store.save(&ledger).await?;
    }

    let message = format!(
        "Removed {} transaction{} with ID {}",
        count,
        if count == 1 { "" } else { "s" },
        args.id()
    );
    Ok(Out::new(message, count))
}
