use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncReadExt;

/// Text to analyze: the argument, else the file, else all of stdin.
pub async fn read_text(text: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .context("failed to read text from stdin")?;
    Ok(buffer)
}
