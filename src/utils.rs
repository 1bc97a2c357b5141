use crate::Result;
use anyhow::Context;
use rand::Rng;
use serde::de::DeserializeOwned;
use std::path::Path;

/// The exclusive upper bound for generated transaction IDs.
const MAX_ID: u32 = 100_000_000;

/// Generates a random transaction ID.
///
/// IDs are drawn uniformly from `0..100,000,000` and are not guaranteed to be
/// unique; operations that take an ID act on every matching record.
pub(crate) fn generate_id() -> u32 {
    rand::thread_rng().gen_range(0..MAX_ID)
}

/// Write a file.
pub(crate) async fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Unable to write to {}", path.display()))
}

/// Read a file to a `String`.
pub(crate) async fn read(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file at {}", path.display()))
}

/// Deserialize a JSON file into type `T`.
pub(crate) async fn deserialize<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = read(path).await?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_in_range() {
        for _ in 0..100 {
            assert!(generate_id() < MAX_ID);
        }
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("x.txt");
        write(&path, "hello").await.unwrap();
        assert_eq!(read(&path).await.unwrap(), "hello");
    }
}
