//! Search command implementation.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use bitskew_core::{
    Improvement, SearchPlan, StopSignal, VariantSink, VariantStore, VariationSearch, count_bits,
    input_stem, read_input,
};

/// Sink that prints each improvement after the store has persisted it.
struct ConsoleSink<'a> {
    store: &'a mut VariantStore,
}

impl VariantSink for ConsoleSink<'_> {
    fn persist(&mut self, improvement: &Improvement, data: &[u8]) -> bitskew_core::Result<()> {
        self.store.persist(improvement, data)?;
        let line = format!(
            "New best at pos {}, key {}: 0s={}, 1s={}, score={}",
            improvement.offset,
            improvement.key,
            improvement.zeros,
            improvement.ones,
            improvement.score
        );
        println!("{}", line.green());
        if let Some(path) = self.store.written().last() {
            println!("  saved: {}", path.display());
        }
        Ok(())
    }
}

/// Run the search command
pub fn run(
    input: &Path,
    output: &Path,
    width: usize,
    stride: usize,
    limit_keys: Option<u64>,
    json: bool,
) -> Result<()> {
    let data = read_input(input)?;
    let stem = input_stem(input);

    let mut plan = SearchPlan::with_stride(width, stride)?;
    if let Some(limit) = limit_keys {
        plan = plan.limit_keys(limit)?;
    }

    let counts = count_bits(&data);
    println!(
        "Input: {} ({} bytes, 0s={}, 1s={})",
        input.display(),
        data.len(),
        counts.zeros,
        counts.ones
    );
    println!(
        "Plan: width {}, stride {}, {} keys per window, {} candidates",
        plan.width,
        plan.stride,
        plan.key_space,
        plan.pair_count(data.len())
    );

    let mut store = VariantStore::create(output, &stem, plan.width)?;

    let stop = Arc::new(StopSignal::new());
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.trigger())
            .context("Failed to install Ctrl-C handler")?;
    }

    let summary = {
        let mut sink = ConsoleSink { store: &mut store };
        VariationSearch::new(&data, plan).run(&mut sink, &stop)?
    };

    if summary.interrupted {
        println!(
            "{}",
            "Search interrupted; variations found so far are kept.".yellow()
        );
    }

    match &summary.best {
        Some(best) => {
            println!(
                "Evaluated {} candidates, {} improvements",
                summary.evaluated, summary.improvements
            );
            if let Some(path) = store.written().last() {
                println!("Best variation: {} (score {})", path.display(), best.score);
            }
        }
        None => println!("No improvement found."),
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
