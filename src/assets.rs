//! Static page templates.
//!
//! The head and body templates are opaque byte blobs. The defaults are
//! compiled into the binary; configuration may point at replacements on disk.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const EMBEDDED_HEAD: &[u8] = include_bytes!("../assets/head.html");
const EMBEDDED_BODY: &[u8] = include_bytes!("../assets/body.html");

/// Optional on-disk replacements for the embedded templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Spliced into `<head>` before any `HEADER.html`.
    #[serde(default)]
    pub head: Option<PathBuf>,

    /// Emitted right after `<body>`, before the up link and the table.
    #[serde(default)]
    pub body: Option<PathBuf>,
}

/// Head and body template blobs used for every page of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub head: Vec<u8>,
    pub body: Vec<u8>,
}

impl Assets {
    pub fn new(head: impl Into<Vec<u8>>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            head: head.into(),
            body: body.into(),
        }
    }

    /// Templates bundled at build time.
    pub fn embedded() -> Self {
        Self::new(EMBEDDED_HEAD, EMBEDDED_BODY)
    }

    /// Embedded templates with any configured file replacing its counterpart.
    pub fn load(config: &AssetsConfig) -> Result<Self, IndexError> {
        let mut assets = Self::embedded();
        if let Some(ref head) = config.head {
            assets.head = read_asset(head)?;
        }
        if let Some(ref body) = config.body {
            assets.body = read_asset(body)?;
        }
        Ok(assets)
    }
}

impl Default for Assets {
    fn default() -> Self {
        Self::embedded()
    }
}

fn read_asset(path: &Path) -> Result<Vec<u8>, IndexError> {
    std::fs::read(path).map_err(|source| IndexError::AssetError {
        path: path.to_path_buf(),
        source,
    })
}
