//! Clear command handler.

use crate::commands::Out;
use crate::{Home, Result, Store};

/// Drops every transaction and rewrites the storage slot as the empty list.
pub async fn clear(home: &Home) -> Result<Out<usize>> {
    let store = Store::new(home);
    let mut ledger = store.load().await?;

    let count = ledger.clear();
    store.save(&ledger).await?;

    let message = format!(
        "Cleared {} transaction{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(Out::new(message, count))
}
