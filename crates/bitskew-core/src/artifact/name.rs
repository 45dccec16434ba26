//! Artifact name encoding.
//!
//! Artifact names carry everything needed to reverse the transform:
//! `{stem}_pos{offset:04}_xor{key:0K}_score{score:010}.bin`, where `K` is
//! the digit count of the window's maximum key. The key field is always
//! exactly `K` digits, so its length identifies the window width; the
//! offset and score fields are minimum widths and grow for large values
//! instead of truncating.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::transform::key_mask;

/// Decimal digit count of the key field, indexed by window width - 1.
const KEY_DIGITS: [usize; 4] = [3, 5, 8, 10];

const MIN_OFFSET_DIGITS: usize = 4;
const MIN_SCORE_DIGITS: usize = 10;
const EXTENSION: &str = ".bin";

/// Metadata embedded in an artifact file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactName {
    pub stem: String,
    pub offset: usize,
    pub width: usize,
    pub key: u64,
    pub score: u64,
}

impl ArtifactName {
    pub fn new(stem: &str, offset: usize, width: usize, key: u64, score: u64) -> Result<Self> {
        if !(1..=KEY_DIGITS.len()).contains(&width) {
            return Err(Error::InvalidPlan(format!(
                "window width {width} has no name encoding"
            )));
        }
        if key > key_mask(width) {
            return Err(Error::KeyOutOfRange { key, width });
        }
        Ok(Self {
            stem: stem.to_string(),
            offset,
            width,
            key,
            score,
        })
    }

    /// Render the artifact file name.
    pub fn file_name(&self) -> String {
        let kw = KEY_DIGITS[self.width - 1];
        format!(
            "{stem}_pos{offset:0ow$}_xor{key:0kw$}_score{score:0sw$}{EXTENSION}",
            stem = self.stem,
            offset = self.offset,
            key = self.key,
            score = self.score,
            ow = MIN_OFFSET_DIGITS,
            sw = MIN_SCORE_DIGITS,
        )
    }

    /// Parse an artifact file name (or a path ending in one).
    ///
    /// Fields are appended to the stem left-to-right, so parsing strips
    /// them right-to-left; a stem that itself contains `_pos` or `_xor`
    /// stays intact.
    pub fn parse(name: &str) -> Result<Self> {
        let malformed = |reason: &str| Error::MalformedName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let file = Path::new(name)
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(|| malformed("not a file name"))?;
        let bare = file
            .strip_suffix(EXTENSION)
            .ok_or_else(|| malformed("missing .bin extension"))?;

        let (rest, score_field) =
            split_field(bare, "_score").ok_or_else(|| malformed("missing score field"))?;
        let (rest, key_field) =
            split_field(rest, "_xor").ok_or_else(|| malformed("missing xor field"))?;
        let (stem, offset_field) =
            split_field(rest, "_pos").ok_or_else(|| malformed("missing pos field"))?;

        if stem.is_empty() {
            return Err(malformed("empty stem"));
        }
        if offset_field.len() < MIN_OFFSET_DIGITS {
            return Err(malformed("pos field shorter than 4 digits"));
        }
        if score_field.len() < MIN_SCORE_DIGITS {
            return Err(malformed("score field shorter than 10 digits"));
        }

        let width = KEY_DIGITS
            .iter()
            .position(|&digits| digits == key_field.len())
            .map(|i| i + 1)
            .ok_or_else(|| malformed("xor field length matches no window width"))?;

        let offset: usize = offset_field
            .parse()
            .map_err(|_| malformed("pos field out of range"))?;
        let key: u64 = key_field
            .parse()
            .map_err(|_| malformed("xor field out of range"))?;
        let score: u64 = score_field
            .parse()
            .map_err(|_| malformed("score field out of range"))?;

        if key > key_mask(width) {
            return Err(malformed("key exceeds the window's key space"));
        }

        Ok(Self {
            stem: stem.to_string(),
            offset,
            width,
            key,
            score,
        })
    }
}

/// Split `s` at the last occurrence of `tag`, returning the prefix and the
/// all-digit field after the tag. `None` if the tag is absent or the field
/// is empty or non-numeric.
fn split_field<'s>(s: &'s str, tag: &str) -> Option<(&'s str, &'s str)> {
    let at = s.rfind(tag)?;
    let field = &s[at + tag.len()..];
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((&s[..at], field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_layout() {
        let name = ArtifactName::new("sample", 12, 2, 5, 40).unwrap();
        assert_eq!(
            name.file_name(),
            "sample_pos0012_xor00005_score0000000040.bin"
        );
    }

    #[test]
    fn test_round_trip_all_widths() {
        for (width, key) in [(1, 0xAB), (2, 0xBEEF), (3, 0xAA_BBCC), (4, 0xDEAD_BEEF)] {
            let name = ArtifactName::new("blob", 7, width, key, 99).unwrap();
            let parsed = ArtifactName::parse(&name.file_name()).unwrap();
            assert_eq!(parsed, name, "width {width}");
        }
    }

    #[test]
    fn test_large_offsets_widen_the_field() {
        let name = ArtifactName::new("blob", 123456, 2, 1, 2).unwrap();
        let rendered = name.file_name();
        assert!(rendered.contains("_pos123456_"));
        assert_eq!(ArtifactName::parse(&rendered).unwrap().offset, 123456);
    }

    #[test]
    fn test_parse_accepts_paths() {
        let parsed =
            ArtifactName::parse("out/dir/sample_pos0001_xor00002_score0000000003.bin").unwrap();
        assert_eq!(parsed.stem, "sample");
        assert_eq!(parsed.offset, 1);
        assert_eq!(parsed.width, 2);
        assert_eq!(parsed.key, 2);
        assert_eq!(parsed.score, 3);
    }

    #[test]
    fn test_parse_keeps_decoy_tags_in_stem() {
        let name = ArtifactName::new("a_pos12_b", 4, 2, 5, 6).unwrap();
        let parsed = ArtifactName::parse(&name.file_name()).unwrap();
        assert_eq!(parsed.stem, "a_pos12_b");
        assert_eq!(parsed.offset, 4);
    }

    #[test]
    fn test_parse_rejects_missing_or_bad_fields() {
        let bad = [
            "plain.bin",
            "x_pos0001.bin",
            "x_pos0001_xor00002.bin",
            "x_pos0001_xor00002_score0000000003",
            "x_posABCD_xor00002_score0000000003.bin",
            "x_pos001_xor00002_score0000000003.bin",
            "x_pos0001_xor00002_score3.bin",
            "_pos0001_xor00002_score0000000003.bin",
        ];
        for name in bad {
            assert!(
                matches!(ArtifactName::parse(name), Err(Error::MalformedName { .. })),
                "{name}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_unknown_key_widths() {
        // a 4-digit key field maps to no window width
        let err = ArtifactName::parse("x_pos0001_xor0002_score0000000003.bin");
        assert!(matches!(err, Err(Error::MalformedName { .. })));
    }

    #[test]
    fn test_parse_rejects_keys_outside_the_window() {
        // 5 digits selects width 2, but 99999 > 65535
        let err = ArtifactName::parse("x_pos0001_xor99999_score0000000003.bin");
        assert!(matches!(err, Err(Error::MalformedName { .. })));
    }

    #[test]
    fn test_new_rejects_oversized_keys() {
        assert!(matches!(
            ArtifactName::new("x", 0, 1, 256, 0),
            Err(Error::KeyOutOfRange { key: 256, width: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_unsupported_widths() {
        assert!(ArtifactName::new("x", 0, 0, 0, 0).is_err());
        assert!(ArtifactName::new("x", 0, 5, 0, 0).is_err());
    }
}
