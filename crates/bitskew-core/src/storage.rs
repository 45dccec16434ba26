//! Variant persistence and input loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::artifact::ArtifactName;
use crate::error::{Error, Result};
use crate::search::{Improvement, VariantSink};

/// Read an input file fully into memory.
///
/// A path that does not reference an existing file is reported as
/// [`Error::InputNotFound`] before anything is written.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    Ok(fs::read(path)?)
}

/// File stem used as the artifact name prefix.
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string()
}

/// Directory-backed artifact store.
///
/// Artifacts land in `{output_dir}/{stem}_best_variation/`, one file per
/// improvement. Later improvements supersede earlier ones but earlier
/// files are kept.
pub struct VariantStore {
    dir: PathBuf,
    stem: String,
    width: usize,
    written: Vec<PathBuf>,
}

impl VariantStore {
    /// Create the store directory, refusing to shadow an existing file.
    pub fn create(output_dir: &Path, stem: &str, width: usize) -> Result<Self> {
        let dir = output_dir.join(format!("{stem}_best_variation"));
        if dir.exists() && !dir.is_dir() {
            return Err(Error::OutputPathConflict(dir));
        }
        fs::create_dir_all(&dir)?;
        debug!("Variant store ready: {}", dir.display());
        Ok(Self {
            dir,
            stem: stem.to_string(),
            width,
            written: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in emission order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path an improvement is stored at.
    pub fn path_for(&self, improvement: &Improvement) -> Result<PathBuf> {
        let name = ArtifactName::new(
            &self.stem,
            improvement.offset,
            self.width,
            improvement.key,
            improvement.score,
        )?;
        Ok(self.dir.join(name.file_name()))
    }
}

impl VariantSink for VariantStore {
    fn persist(&mut self, improvement: &Improvement, data: &[u8]) -> Result<()> {
        let path = self.path_for(improvement)?;
        fs::write(&path, data)?;
        debug!("Variation saved: {} ({} bytes)", path.display(), data.len());
        self.written.push(path);
        Ok(())
    }
}

/// Supplies the output file name for a recovered original.
///
/// Keeps interactive prompting out of the core: callers that want to ask
/// the user implement this against stdin, everything else uses
/// [`DerivedNameProvider`]. Returning `None` cancels the write.
pub trait NameProvider {
    fn output_name(&self, suggested: &str) -> Option<String>;
}

/// Non-interactive provider that accepts the suggested name as-is.
#[derive(Debug, Default)]
pub struct DerivedNameProvider;

impl NameProvider for DerivedNameProvider {
    fn output_name(&self, suggested: &str) -> Option<String> {
        Some(suggested.to_string())
    }
}

/// Write a recovered original under `output_dir`, asking `names` for the
/// final file name.
///
/// Returns the written path, or `None` when the provider cancels; nothing
/// is created on cancellation.
pub fn write_recovered(
    output_dir: &Path,
    suggested: &str,
    names: &dyn NameProvider,
    data: &[u8],
) -> Result<Option<PathBuf>> {
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(Error::OutputPathConflict(output_dir.to_path_buf()));
    }
    let Some(file_name) = names.output_name(suggested) else {
        return Ok(None);
    };
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    fs::write(&path, data)?;
    debug!("Recovered file saved: {}", path.display());
    Ok(Some(path))
}
