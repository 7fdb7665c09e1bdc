//! End-to-end index build: write artifacts to a temp directory, build an
//! index over them, and check both its contents and its on-disk round trip.

use search_engine::artifact;
use search_engine::indexer::build_index;
use search_engine::indexer::index::InvertedIndex;

#[test]
fn builds_and_reloads_an_index_over_three_documents() {
    let dir = tempfile::tempdir().unwrap();
    artifact::write_artifact(
        dir.path(),
        1,
        "https://example.com/1",
        0,
        b"<html><body>The quick brown fox jumps over the lazy dog</body></html>",
    )
    .unwrap();
    artifact::write_artifact(
        dir.path(),
        2,
        "https://example.com/2",
        1,
        b"<html><body>The dog barks at the fox</body></html>",
    )
    .unwrap();
    artifact::write_artifact(
        dir.path(),
        3,
        "https://example.com/3",
        1,
        b"<html><body>Cats and dogs</body></html>",
    )
    .unwrap();

    let (index, stats) = build_index(dir.path(), 1000).unwrap();
    assert_eq!(stats.documents_indexed, 3);

    let dog = index.get("dog").unwrap();
    assert_eq!(dog.postings.len(), 2);

    let fox = index.get("fox").unwrap();
    assert_eq!(fox.postings.len(), 2);

    assert!(index.get("cats").is_some());
    assert!(index.get("at").is_none(), "words shorter than three characters are dropped");

    let index_path = dir.path().join("index.dat");
    index.write_to_file(&index_path).unwrap();

    let reloaded = InvertedIndex::reload_from_file(&index_path).unwrap();
    assert_eq!(reloaded.word_count(), index.word_count());
    assert_eq!(reloaded.serialize(), index.serialize());

    let rewrite_path = dir.path().join("index_rewritten.dat");
    reloaded.write_to_file(&rewrite_path).unwrap();
    assert_eq!(
        std::fs::read_to_string(&index_path).unwrap(),
        std::fs::read_to_string(&rewrite_path).unwrap()
    );
}

#[test]
fn missing_artifact_aborts_the_build() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("1"), b"").unwrap();

    let result = build_index(dir.path(), 1000);
    assert!(result.is_err());
}
