//! CLI implementation of NameProvider for interactive recovery

use std::io::{self, BufRead, Write};

use bitskew_core::NameProvider;

/// Prompts for the recovered file's name on stdin.
///
/// Empty input cancels the write instead of falling back to the
/// suggestion.
pub struct CliNamePrompter;

impl NameProvider for CliNamePrompter {
    fn output_name(&self, suggested: &str) -> Option<String> {
        print!("Output file name (empty cancels, e.g. {suggested}): ");
        io::stdout().flush().ok();

        let stdin = io::stdin();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() {
            return None;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
