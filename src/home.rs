use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// The `Home` object represents the file paths of the `$FIN_HOME` directory.
/// Everything the tracker persists lives here: the transactions slot and the
/// default chart output.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Home {
    root: PathBuf,
    transactions: PathBuf,
    chart: PathBuf,
}

impl Home {
    /// This will create the `fin_home` directory, if it does not exist, and canonicalize itself.
    pub async fn new(fin_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = fin_home.into();
        make_dir(&maybe_relative)
            .await
            .context("Unable to create fin home directory")?;
        let root = fs::canonicalize(&maybe_relative).await.with_context(|| {
            format!(
                "Unable to canonicalize the path {}",
                maybe_relative.to_string_lossy()
            )
        })?;
        Ok(Self {
            transactions: root.join("transactions.json"),
            chart: root.join("chart.svg"),
            root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The storage slot that the ledger is mirrored to.
    pub fn transactions(&self) -> &Path {
        &self.transactions
    }

    /// Where the category chart is written unless `--out` says otherwise.
    pub fn chart(&self) -> &Path {
        &self.chart
    }
}

async fn make_dir(p: &Path) -> Result<()> {
    fs::create_dir_all(p)
        .await
        .with_context(|| format!("Unable to create directory at {}", p.to_string_lossy()))
}

#[tokio::test]
async fn test_home() {
    use tempfile::TempDir;
    let dir = TempDir::new().unwrap();
    let home_dir = dir.path().join("fin");
    let home = Home::new(&home_dir).await.unwrap();
    assert!(fs::read_dir(home.root()).await.is_ok());
    assert!(home.transactions().ends_with("transactions.json"));
    assert!(home.chart().ends_with("chart.svg"));
}
