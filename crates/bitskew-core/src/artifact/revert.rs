//! Reversal of persisted variations.

use tracing::debug;

use super::name::ArtifactName;
use crate::error::Result;
use crate::transform::xor_window;

/// A recovered original together with the metadata that produced it.
#[derive(Debug, Clone)]
pub struct RecoveredVariant {
    pub name: ArtifactName,
    pub data: Vec<u8>,
}

/// Invert the transform recorded in `file_name` over `stored`.
///
/// The XOR transform is its own inverse, so re-applying it with the
/// decoded (offset, width, key) restores the pre-transform bytes exactly.
/// Fails with `MalformedName` when the name decodes to nothing, and with
/// `InvalidOffset` when the decoded window does not fit `stored`.
pub fn revert_artifact(file_name: &str, stored: &[u8]) -> Result<RecoveredVariant> {
    let name = ArtifactName::parse(file_name)?;
    debug!(
        "Reverting {}: pos {}, width {}, key {}",
        file_name, name.offset, name.width, name.key
    );
    let data = xor_window(stored, name.offset, name.width, name.key)?;
    Ok(RecoveredVariant { name, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_revert_restores_the_original() {
        let original = [0x10u8, 0x20, 0x30, 0x40];
        let stored = xor_window(&original, 1, 2, 0x0FF0).unwrap();
        let name = ArtifactName::new("orig", 1, 2, 0x0FF0, 99).unwrap();

        let recovered = revert_artifact(&name.file_name(), &stored).unwrap();
        assert_eq!(recovered.data, original);
        assert_eq!(recovered.name, name);
    }

    #[test]
    fn test_revert_rejects_malformed_names() {
        assert!(matches!(
            revert_artifact("junk.bin", &[0; 4]),
            Err(Error::MalformedName { .. })
        ));
    }

    #[test]
    fn test_revert_rejects_windows_outside_the_buffer() {
        let name = ArtifactName::new("orig", 3, 2, 1, 0).unwrap();
        assert!(matches!(
            revert_artifact(&name.file_name(), &[0u8; 4]),
            Err(Error::InvalidOffset {
                offset: 3,
                width: 2,
                len: 4
            })
        ));
    }
}
