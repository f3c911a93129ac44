//! First-run initialization of the store root.

use std::path::Path;

/// Packaged bootstrap document, served at `/` until replaced.
const DEFAULT_INDEX: &str = include_str!("../templates/index.html");

/// Ensure `data_dir` exists and seed the `index.html` resource on first run.
///
/// The seed is only written when absent, so a pod owner's edited (or even
/// deleted-and-recreated) index survives restarts. A deliberate later
/// `DELETE /data/index.html` is honored until the next process start.
pub async fn initialize(data_dir: &str) -> std::io::Result<()> {
    tokio::fs::create_dir_all(data_dir).await?;

    let index_path = Path::new(data_dir).join("index.html");
    if !tokio::fs::try_exists(&index_path).await? {
        tokio::fs::write(&index_path, DEFAULT_INDEX).await?;
        tracing::info!(path = %index_path.display(), "Seeded bootstrap index");
    }

    Ok(())
}
