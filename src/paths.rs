use std::path::{Path, PathBuf};

use crate::mode::DatasetMode;

/// Centralized helpers for locating dataset documents on disk.
/// Keeps file locations consistent between the directory source, config and CLI.
#[inline]
pub fn resource_path(root: &Path, mode: DatasetMode) -> PathBuf { root.join(mode.resource_name()) }

// ---- Repository defaults (relative to the crate root) ----
#[inline]
pub fn repo_data_root() -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data") }

#[inline]
pub fn repo_resource_path(mode: DatasetMode) -> PathBuf { resource_path(&repo_data_root(), mode) }
