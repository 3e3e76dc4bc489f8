//! Dataset sources
//! ---------------
//! A source produces one `RelationTable` per `DatasetMode`. The registry only
//! talks to this trait, so data can come from the embedded documents, a
//! directory on disk, or an in-memory map without touching lookup code.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DatasetError, DatasetResult};
use crate::mode::DatasetMode;
use crate::paths;
use crate::relation::RelationTable;

pub trait DatasetSource: Send + Sync {
    fn load(&self, mode: DatasetMode) -> DatasetResult<RelationTable>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

// ---------- Embedded documents (bundled at compile time) ----------

const EMBEDDED_ALL: &str = include_str!("../data/relazioni.json");
const EMBEDDED_PERSONAGGI: &str = include_str!("../data/protagonisti_relazioni.json");
const EMBEDDED_LUOGHI: &str = include_str!("../data/protagonisti_luoghi_relazioni.json");

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Raw JSON text bundled for `mode`.
    pub fn text(mode: DatasetMode) -> &'static str {
        match mode {
            DatasetMode::All => EMBEDDED_ALL,
            DatasetMode::Personaggi => EMBEDDED_PERSONAGGI,
            DatasetMode::Luoghi => EMBEDDED_LUOGHI,
        }
    }
}

impl DatasetSource for EmbeddedSource {
    fn load(&self, mode: DatasetMode) -> DatasetResult<RelationTable> {
        debug!(target: "relazioni::source", "embedded: parsing {}", mode.resource_name());
        RelationTable::from_json_str(Self::text(mode))
            .map_err(|e| e.with_context(&format!("embedded {}", mode.resource_name())))
    }

    fn describe(&self) -> String { "embedded".to_string() }
}

// ---------- Directory of JSON files ----------

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    overrides: HashMap<DatasetMode, String>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), overrides: HashMap::new() }
    }

    /// Read `mode` from `file_name` (relative to the root) instead of its default name.
    pub fn with_file(mut self, mode: DatasetMode, file_name: impl Into<String>) -> Self {
        self.overrides.insert(mode, file_name.into());
        self
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn path_for(&self, mode: DatasetMode) -> PathBuf {
        match self.overrides.get(&mode) {
            Some(name) => self.root.join(name),
            None => paths::resource_path(&self.root, mode),
        }
    }
}

impl DatasetSource for DirectorySource {
    fn load(&self, mode: DatasetMode) -> DatasetResult<RelationTable> {
        let path = self.path_for(mode);
        debug!(target: "relazioni::source", "directory: reading {}", path.display());
        let ctx = path.display().to_string();
        let file = File::open(&path).map_err(|e| DatasetError::from(e).with_context(&ctx))?;
        RelationTable::from_reader(BufReader::new(file)).map_err(|e| e.with_context(&ctx))
    }

    fn describe(&self) -> String { format!("directory {}", self.root().display()) }
}

// ---------- In-memory ----------

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<DatasetMode, RelationTable>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn with_table(mut self, mode: DatasetMode, table: RelationTable) -> Self {
        self.tables.insert(mode, table);
        self
    }
}

impl DatasetSource for MemorySource {
    fn load(&self, mode: DatasetMode) -> DatasetResult<RelationTable> {
        self.tables.get(&mode).cloned().ok_or_else(|| {
            DatasetError::not_found("resource_missing".to_string(), format!("no table supplied for mode '{}'", mode))
        })
    }

    fn describe(&self) -> String { format!("memory ({} tables)", self.tables.len()) }
}
