//! Inspect command implementation.

use std::path::Path;

use anyhow::{Context, Result};

use bitskew_core::ArtifactName;

/// Run the inspect command
pub fn run(artifact: &Path, json: bool) -> Result<()> {
    let file_name = artifact
        .file_name()
        .and_then(|f| f.to_str())
        .with_context(|| format!("Artifact path has no file name: {}", artifact.display()))?;

    let name = ArtifactName::parse(file_name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&name)?);
    } else {
        println!("stem:   {}", name.stem);
        println!("offset: {}", name.offset);
        println!("width:  {} bytes", name.width);
        println!("key:    {} (0x{:X})", name.key, name.key);
        println!("score:  {}", name.score);
    }

    Ok(())
}
