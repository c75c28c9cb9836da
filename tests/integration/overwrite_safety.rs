use std::fs;

use static_indexes::report::Outcome;
use static_indexes::{WalkOptions, MARKER};
use tempfile::TempDir;

use crate::integration::support::{read_index, recursive, run};

#[test]
fn hand_written_index_is_left_byte_for_byte() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();
    let original = b"<html><body>curated by hand\xff</body></html>".to_vec();
    fs::write(temp.path().join("index.html"), &original).unwrap();

    let report = run(temp.path(), WalkOptions::default()).unwrap();

    assert_eq!(report.outcome_for(temp.path()), Some(Outcome::Skipped));
    assert_eq!(fs::read(temp.path().join("index.html")).unwrap(), original);
}

#[test]
fn edited_page_keeping_marker_is_regenerated() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();
    fs::write(
        temp.path().join("index.html"),
        format!("<p>my notes</p>\n<!-- kept: {} -->", MARKER),
    )
    .unwrap();

    let report = run(temp.path(), WalkOptions::default()).unwrap();

    assert_eq!(report.outcome_for(temp.path()), Some(Outcome::Written));
    let page = read_index(temp.path());
    assert!(!page.contains("my notes"));
    assert!(page.contains("href=\"a.txt\""));
}

#[test]
fn skipped_directory_does_not_stop_recursion() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("docs")).unwrap();
    fs::create_dir(temp.path().join("img")).unwrap();
    fs::write(temp.path().join("docs").join("index.html"), "<h1>Docs</h1>").unwrap();

    let report = run(temp.path(), recursive()).unwrap();

    assert_eq!(report.len(), 3);
    assert_eq!(
        report.outcome_for(&temp.path().join("docs")),
        Some(Outcome::Skipped)
    );
    assert_eq!(
        report.outcome_for(&temp.path().join("img")),
        Some(Outcome::Written)
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("docs").join("index.html")).unwrap(),
        "<h1>Docs</h1>"
    );
}

#[test]
fn marker_removed_by_hand_protects_page_from_then_on() {
    let temp = TempDir::new().unwrap();
    run(temp.path(), WalkOptions::default()).unwrap();
    let generated = read_index(temp.path());
    let adopted = generated.replace(MARKER, "<!-- mine now -->");
    fs::write(temp.path().join("index.html"), &adopted).unwrap();
    fs::write(temp.path().join("new.txt"), "n").unwrap();

    let report = run(temp.path(), WalkOptions::default()).unwrap();

    assert_eq!(report.outcome_for(temp.path()), Some(Outcome::Skipped));
    assert_eq!(read_index(temp.path()), adopted);
}
