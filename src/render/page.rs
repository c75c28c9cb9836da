//! Full page composition.

use crate::assets::Assets;
use crate::icons::IconTable;
use crate::listing::DirectoryListing;
use crate::render::table::render_table;
use crate::types::MARKER;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

const UP_LINK: &str = "<div><a href=\"..\"><i class=\"fas fa-arrow-up\"></i> up</a></div>";

/// Directory-local override blobs, included verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub header: Option<Vec<u8>>,
    pub readme: Option<Vec<u8>>,
}

impl Overrides {
    /// Read `header_file` and `readme_file` from `dir`.
    ///
    /// A file that cannot be read is treated as absent.
    pub fn read(dir: &Path, header_file: &str, readme_file: &str) -> Self {
        Self {
            header: read_optional(&dir.join(header_file)),
            readme: read_optional(&dir.join(readme_file)),
        }
    }
}

fn read_optional(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable override");
            None
        }
    }
}

/// Assembles pages from the shared templates and icon table.
///
/// Holds no per-directory state: the output depends only on its arguments.
#[derive(Debug, Clone, Copy)]
pub struct PageComposer<'a> {
    assets: &'a Assets,
    icons: &'a IconTable,
}

impl<'a> PageComposer<'a> {
    pub fn new(assets: &'a Assets, icons: &'a IconTable) -> Self {
        Self { assets, icons }
    }

    /// Compose the page bytes for one directory.
    pub fn compose(&self, listing: &DirectoryListing, overrides: &Overrides) -> Vec<u8> {
        let mut page = Vec::new();
        page.extend_from_slice(b"<html>");
        page.extend_from_slice(MARKER.as_bytes());

        page.extend_from_slice(b"<head>");
        page.extend_from_slice(&self.assets.head);
        if let Some(ref header) = overrides.header {
            page.extend_from_slice(header);
        }
        page.extend_from_slice(b"</head>");

        page.extend_from_slice(b"<body>");
        page.extend_from_slice(&self.assets.body);
        page.extend_from_slice(UP_LINK.as_bytes());
        page.extend_from_slice(render_table(self.icons, listing).as_bytes());
        if let Some(ref readme) = overrides.readme {
            page.extend_from_slice(readme);
        }
        page.extend_from_slice(b"</body>");

        page.extend_from_slice(b"</html>");
        page
    }
}
