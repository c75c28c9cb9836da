//! static-indexes: static directory listings
//!
//! Walks directory trees and writes a self-contained `index.html` listing into
//! each visited directory. Pages carry a marker comment so that later runs can
//! tell generated pages from hand-written ones and never overwrite the latter.

pub mod assets;
pub mod config;
pub mod error;
pub mod icons;
pub mod listing;
pub mod logging;
pub mod render;
pub mod report;
pub mod safety;
pub mod tooling;
pub mod types;
pub mod walker;

pub use error::IndexError;
pub use types::{Entry, MARKER};
pub use walker::{DirectoryWalker, WalkOptions};
