//! End-to-end search, persist, revert round trips through the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use bitskew_core::{
    ArtifactName, SearchPlan, SearchSummary, StopSignal, VariantStore, VariationSearch,
    count_bits, revert_artifact,
};

fn search_into_store(data: &[u8], dir: &Path, stem: &str) -> (SearchSummary, Vec<PathBuf>) {
    let plan = SearchPlan::sliding(2).unwrap();
    let mut store = VariantStore::create(dir, stem, plan.width).unwrap();
    let summary = VariationSearch::new(data, plan)
        .run(&mut store, &StopSignal::new())
        .unwrap();
    (summary, store.written().to_vec())
}

fn revert_path(path: &Path) -> Vec<u8> {
    let stored = fs::read(path).unwrap();
    let file_name = path.file_name().unwrap().to_str().unwrap();
    revert_artifact(file_name, &stored).unwrap().data
}

#[test]
fn zero_buffer_reaches_full_imbalance_and_reverts() {
    let original = [0u8; 4];
    let tmp = tempfile::tempdir().unwrap();

    let (summary, written) = search_into_store(&original, tmp.path(), "zeros");

    let best = summary.best.expect("search must find a best variation");
    assert_eq!(best.score, 32);
    assert!(!summary.interrupted);

    let last = written.last().expect("at least one artifact");
    assert_eq!(revert_path(last), original);
}

#[test]
fn every_artifact_reverts_and_carries_its_own_score() {
    let original = [0x12u8, 0x34, 0xAB, 0xCD, 0x5A];
    let tmp = tempfile::tempdir().unwrap();

    let (summary, written) = search_into_store(&original, tmp.path(), "mixed");
    assert_eq!(summary.improvements as usize, written.len());

    let mut last_score = None;
    for path in &written {
        let stored = fs::read(path).unwrap();
        let name = ArtifactName::parse(path.file_name().unwrap().to_str().unwrap()).unwrap();

        // the name's score matches the stored bytes it describes
        assert_eq!(count_bits(&stored).imbalance(), name.score);
        // and scores grow strictly across the run
        if let Some(previous) = last_score {
            assert!(name.score > previous);
        }
        last_score = Some(name.score);

        assert_eq!(revert_path(path), original);
    }
}

#[test]
fn earlier_artifacts_are_kept_on_disk() {
    let original = [0x55u8, 0xAA, 0x55];
    let tmp = tempfile::tempdir().unwrap();

    let (_, written) = search_into_store(&original, tmp.path(), "history");
    assert!(written.len() > 1, "expected more than one improvement");
    for path in &written {
        assert!(path.exists(), "{} missing", path.display());
    }
}
