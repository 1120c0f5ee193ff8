// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::DEFAULT_OUT_DIR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            export: ExportOptions::default(),
        }
    }
}

/// Where detail exports land. Both export actions (CSV and PDF) write
/// `Detalle_<contract>.<ext>` into this directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
