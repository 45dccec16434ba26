//! Revert command implementation.

use std::path::Path;

use anyhow::{Context, Result};

use bitskew_core::{DerivedNameProvider, read_input, revert_artifact, write_recovered};

use crate::prompter::CliNamePrompter;

/// Run the revert command
pub fn run(artifact: &Path, output: &Path, name: Option<&str>, interactive: bool) -> Result<()> {
    let file_name = artifact
        .file_name()
        .and_then(|f| f.to_str())
        .with_context(|| format!("Artifact path has no file name: {}", artifact.display()))?;

    let stored = read_input(artifact)?;
    let recovered = revert_artifact(file_name, &stored)?;

    println!(
        "Decoded {}: pos={}, width={}, key={}, score={}",
        file_name,
        recovered.name.offset,
        recovered.name.width,
        recovered.name.key,
        recovered.name.score
    );

    let suggested = format!("{}_restored.bin", recovered.name.stem);
    let written = match name {
        Some(name) => write_recovered(output, name, &DerivedNameProvider, &recovered.data)?,
        None if interactive => {
            write_recovered(output, &suggested, &CliNamePrompter, &recovered.data)?
        }
        None => write_recovered(output, &suggested, &DerivedNameProvider, &recovered.data)?,
    };

    match written {
        Some(path) => {
            println!("Recovered file saved as: {}", path.display());
            println!("File size: {} bytes", recovered.data.len());
        }
        None => println!("No output name provided, revert cancelled."),
    }

    Ok(())
}
