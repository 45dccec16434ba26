//! Binary digit dump of a file.

use std::path::Path;

use anyhow::Result;

use bitskew_core::read_input;

const BYTES_PER_ROW: usize = 8;

/// Format bytes as space-separated binary octets, 8 per row.
pub fn format_bits(data: &[u8]) -> String {
    data.chunks(BYTES_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|b| format!("{b:08b}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the bits command
pub fn run(file: &Path, limit: usize) -> Result<()> {
    let data = read_input(file)?;
    let shown = data.len().min(limit);

    println!("{}", format_bits(&data[..shown]));
    if shown < data.len() {
        println!(
            "... ({} more bytes, raise --limit to show them)",
            data.len() - shown
        );
    }

    Ok(())
}
