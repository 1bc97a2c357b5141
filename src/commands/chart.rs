//! Chart command handler.

use crate::args::ChartArgs;
use crate::chart::Doughnut;
use crate::commands::Out;
use crate::{utils, Home, Result, Store};
use anyhow::Context;
use std::path::PathBuf;

/// Renders the category breakdown doughnut to an SVG file.
///
/// The chart lands at `$FIN_HOME/chart.svg` unless `--out` says otherwise. An
/// empty ledger writes nothing and deletes any previously written chart, so a
/// stale breakdown never outlives its data.
pub async fn chart(home: &Home, args: ChartArgs) -> Result<Out<PathBuf>> {
    let store = Store::new(home);
    let ledger = store.load().await?;
    let path = args.out().cloned().unwrap_or_else(|| home.chart().to_path_buf());

    if ledger.is_empty() {
        if path.is_file() {
            tokio::fs::remove_file(&path)
                .await
                .with_context(|| format!("Unable to remove stale chart at {}", path.display()))?;
        }
        return Ok(Out::new_message("No transactions to chart"));
    }

    let totals = ledger.category_totals();
    let document = Doughnut::from(&totals).document();
    utils::write(&path, document.to_string()).await?;

    let message = format!(
        "Wrote a chart of {} categor{} to {}",
        totals.len(),
        if totals.len() == 1 { "y" } else { "ies" },
        path.display()
    );
    Ok(Out::new(message, path))
}
