//! Directory Walker
//!
//! Depth-first, single-threaded traversal. Each directory is read once, its
//! page composed and gated, and then (in recursive mode) its child
//! directories are visited in name order. The first filesystem error aborts
//! the whole run.

use crate::assets::Assets;
use crate::config::{HiddenRecursion, IndexConfig};
use crate::error::IndexError;
use crate::icons::IconTable;
use crate::listing::{read_directory, DirectoryListing, EntryLister};
use crate::render::{Overrides, PageComposer};
use crate::report::{Outcome, RunReport};
use crate::safety;
use crate::types::{Entry, TimeZone};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Traversal and generation settings for one run.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub recursive: bool,
    pub include_hidden: bool,
    pub hidden_recursion: HiddenRecursion,
    pub index_file: String,
    pub header_file: String,
    pub readme_file: String,
    pub timezone: TimeZone,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::from(&IndexConfig::default())
    }
}

impl From<&IndexConfig> for WalkOptions {
    fn from(config: &IndexConfig) -> Self {
        Self {
            recursive: config.recursive,
            include_hidden: config.include_hidden,
            hidden_recursion: config.hidden_recursion,
            index_file: config.index_file.clone(),
            header_file: config.header_file.clone(),
            readme_file: config.readme_file.clone(),
            timezone: config.timezone,
        }
    }
}

/// Whether a directory was named on the command line or reached by recursion.
///
/// Only recorded in logs for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    TopLevel,
    Nested,
}

/// Drives index generation over one or more directory trees.
pub struct DirectoryWalker<'a> {
    options: WalkOptions,
    lister: EntryLister,
    composer: PageComposer<'a>,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(options: WalkOptions, assets: &'a Assets, icons: &'a IconTable) -> Self {
        let lister = EntryLister::new(options.include_hidden, options.index_file.clone());
        Self {
            options,
            lister,
            composer: PageComposer::new(assets, icons),
        }
    }

    /// Process each root in order, stopping at the first error.
    pub fn run<P: AsRef<Path>>(&self, roots: &[P]) -> Result<RunReport, IndexError> {
        let mut report = RunReport::default();
        for root in roots {
            self.process(root.as_ref(), Invocation::TopLevel, &mut report)?;
        }
        Ok(report)
    }

    /// Generate the index for `dir` and, in recursive mode, its subdirectories.
    pub fn process(
        &self,
        dir: &Path,
        invocation: Invocation,
        report: &mut RunReport,
    ) -> Result<(), IndexError> {
        let metadata = std::fs::metadata(dir).map_err(|source| IndexError::NotFound {
            path: dir.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(IndexError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        debug!(path = %dir.display(), ?invocation, "Processing directory");

        let raw = read_directory(dir, self.options.timezone)?;
        let listing = self.lister.list(raw.iter().cloned());

        let outcome = self.generate_index(dir, &listing)?;
        report.record(dir.to_path_buf(), outcome);

        if !self.options.recursive {
            return Ok(());
        }

        for child in raw.iter().filter(|e| e.is_dir) {
            if !self.should_descend(child, &listing) {
                debug!(path = %dir.join(&child.file_name).display(), "Not descending");
                continue;
            }
            self.process(&dir.join(&child.file_name), Invocation::Nested, report)?;
        }
        Ok(())
    }

    /// Compose and, if the gate allows, write the index file for one directory.
    pub fn generate_index(
        &self,
        dir: &Path,
        listing: &DirectoryListing,
    ) -> Result<Outcome, IndexError> {
        let index_path = dir.join(&self.options.index_file);
        info!(path = %index_path.display(), "Generating index");

        let verdict = safety::inspect(&index_path);
        if !verdict.is_safe() {
            warn!(path = %index_path.display(), "Not safe to replace");
            return Ok(Outcome::Skipped);
        }

        let overrides = Overrides::read(dir, &self.options.header_file, &self.options.readme_file);
        let page = self.composer.compose(listing, &overrides);

        if verdict.existing() == Some(page.as_slice()) {
            debug!(path = %index_path.display(), "Index already up to date");
            return Ok(Outcome::Unchanged);
        }

        write_index(&index_path, &page)?;
        Ok(Outcome::Written)
    }

    fn should_descend(&self, child: &Entry, listing: &DirectoryListing) -> bool {
        match self.options.hidden_recursion {
            HiddenRecursion::SkipWhenIncluded => {
                !(child.is_hidden() && self.options.include_hidden)
            }
            HiddenRecursion::FollowListing => listing.get(&child.file_name).is_some(),
        }
    }
}

/// Replace the file at `path` with `bytes`. New files get mode 0644 on Unix.
pub fn write_index(path: &Path, bytes: &[u8]) -> Result<(), IndexError> {
    let write_failed = |source: std::io::Error| IndexError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(write_failed)?;
    file.write_all(bytes).map_err(write_failed)?;
    file.flush().map_err(write_failed)
}
