use static_indexes::assets::Assets;
use static_indexes::icons::IconTable;
use static_indexes::report::RunReport;
use static_indexes::{DirectoryWalker, IndexError, WalkOptions};
use std::path::Path;

/// Run the walker over `roots` with embedded assets and the built-in icon table.
pub fn run_roots(roots: &[&Path], options: WalkOptions) -> Result<RunReport, IndexError> {
    let assets = Assets::embedded();
    let icons = IconTable::default();
    DirectoryWalker::new(options, &assets, &icons).run(roots)
}

pub fn run(root: &Path, options: WalkOptions) -> Result<RunReport, IndexError> {
    run_roots(&[root], options)
}

pub fn recursive() -> WalkOptions {
    WalkOptions {
        recursive: true,
        ..WalkOptions::default()
    }
}

pub fn read_index(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("index.html")).unwrap()
}

/// `(icon, href)` for every data row of a rendered page, in page order.
pub fn rows(page: &str) -> Vec<(String, String)> {
    page.split("<td>\t<i class=\"fas fa-")
        .skip(1)
        .map(|chunk| {
            let icon = chunk.split('"').next().unwrap().to_string();
            let href = chunk
                .split("<a href=\"")
                .nth(1)
                .and_then(|rest| rest.split('"').next())
                .unwrap()
                .to_string();
            (icon, href)
        })
        .collect()
}
