use std::fs;

use static_indexes::report::Outcome;
use static_indexes::{WalkOptions, MARKER};
use tempfile::TempDir;

use crate::integration::support::{read_index, recursive, rows, run};

fn sample_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("b.jpg"), "jpg").unwrap();
    fs::write(temp.path().join("a.txt"), "txt").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    temp
}

#[test]
fn non_recursive_run_lists_files_and_dirs_in_name_order() {
    let temp = sample_tree();
    let report = run(temp.path(), WalkOptions::default()).unwrap();

    assert_eq!(report.len(), 1);
    let page = read_index(temp.path());
    assert_eq!(
        rows(&page),
        vec![
            ("file-alt".to_string(), "a.txt".to_string()),
            ("file-image".to_string(), "b.jpg".to_string()),
            ("folder-open".to_string(), "sub/".to_string()),
        ]
    );
    assert!(page.contains(">sub/</a>"));
    assert!(!temp.path().join("sub").join("index.html").exists());
}

#[test]
fn recursive_run_writes_empty_table_into_empty_subdirectory() {
    let temp = sample_tree();
    let report = run(temp.path(), recursive()).unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(
        report.outcome_for(&temp.path().join("sub")),
        Some(Outcome::Written)
    );
    let page = read_index(&temp.path().join("sub"));
    assert!(rows(&page).is_empty());
    assert!(page.contains("<th>Name</th>"));
    assert!(page.contains("\t\t<tr>\n\t\t\t<td></td>\n\t\t</tr>\n\t</tbody>\n</table>"));
}

#[test]
fn page_starts_with_marker_and_never_lists_itself() {
    let temp = sample_tree();
    run(temp.path(), WalkOptions::default()).unwrap();
    run(temp.path(), WalkOptions::default()).unwrap();

    let page = read_index(temp.path());
    assert!(page.starts_with(&format!("<html>{}<head>", MARKER)));
    assert!(!rows(&page).iter().any(|(_, href)| href == "index.html"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp = sample_tree();
    run(temp.path(), WalkOptions::default()).unwrap();
    let first = fs::read(temp.path().join("index.html")).unwrap();

    let report = run(temp.path(), WalkOptions::default()).unwrap();
    let second = fs::read(temp.path().join("index.html")).unwrap();

    assert_eq!(first, second);
    assert_eq!(report.outcome_for(temp.path()), Some(Outcome::Unchanged));
}

#[test]
fn recursive_runs_converge_after_first_generation() {
    let temp = sample_tree();
    fs::write(temp.path().join("sub").join("c.pdf"), "pdf").unwrap();

    run(temp.path(), recursive()).unwrap();
    run(temp.path(), recursive()).unwrap();
    let root_before = fs::read(temp.path().join("index.html")).unwrap();
    let sub_before = fs::read(temp.path().join("sub").join("index.html")).unwrap();

    let report = run(temp.path(), recursive()).unwrap();
    assert_eq!(report.count(Outcome::Unchanged), 2);
    assert_eq!(fs::read(temp.path().join("index.html")).unwrap(), root_before);
    assert_eq!(
        fs::read(temp.path().join("sub").join("index.html")).unwrap(),
        sub_before
    );
}

#[test]
fn header_and_readme_overrides_are_spliced_verbatim() {
    let temp = sample_tree();
    fs::write(temp.path().join("HEADER.html"), "<title>Mirror</title>").unwrap();
    fs::write(temp.path().join("README.html"), "<p>Welcome & enjoy</p>").unwrap();

    run(temp.path(), WalkOptions::default()).unwrap();
    let page = read_index(temp.path());

    assert!(page.contains("<title>Mirror</title></head>"));
    assert!(page.contains("</table><p>Welcome & enjoy</p></body></html>"));
    let hrefs: Vec<String> = rows(&page).into_iter().map(|(_, h)| h).collect();
    assert_eq!(
        hrefs,
        vec!["HEADER.html", "README.html", "a.txt", "b.jpg", "sub/"]
    );
}

#[test]
fn override_change_is_reflected_on_next_run() {
    let temp = sample_tree();
    run(temp.path(), WalkOptions::default()).unwrap();
    fs::write(temp.path().join("README.html"), "<p>new</p>").unwrap();

    let report = run(temp.path(), WalkOptions::default()).unwrap();
    assert_eq!(report.outcome_for(temp.path()), Some(Outcome::Written));
    assert!(read_index(temp.path()).contains("<p>new</p></body>"));
}
