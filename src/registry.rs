//! Dataset registry
//! ----------------
//! Immutable mapping from every `DatasetMode` to exactly one `RelationTable`.
//! Built once from a `DatasetSource`; there is no mutation API. A process-wide
//! instance lives in a `OnceCell` and defaults to the embedded documents.

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{DatasetError, DatasetResult};
use crate::mode::DatasetMode;
use crate::relation::RelationTable;
use crate::source::{DatasetSource, EmbeddedSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRegistry {
    all: RelationTable,
    personaggi: RelationTable,
    luoghi: RelationTable,
}

/// Per-mode counts, as printed by `--summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeSummary {
    pub mode: DatasetMode,
    pub entities: usize,
    pub links: usize,
}

impl DatasetRegistry {
    pub fn from_tables(all: RelationTable, personaggi: RelationTable, luoghi: RelationTable) -> Self {
        Self { all, personaggi, luoghi }
    }

    /// Load every mode from `source`. The first failing mode aborts the build.
    pub fn load(source: &dyn DatasetSource) -> DatasetResult<Self> {
        let origin = source.describe();
        let load_one = |mode: DatasetMode| -> DatasetResult<RelationTable> {
            let table = source.load(mode).map_err(|e| e.with_context(&format!("mode '{}'", mode)))?;
            debug!(target: "relazioni::registry", "loaded mode={} entities={} links={}", mode, table.len(), table.link_count());
            Ok(table)
        };
        let reg = Self {
            all: load_one(DatasetMode::All)?,
            personaggi: load_one(DatasetMode::Personaggi)?,
            luoghi: load_one(DatasetMode::Luoghi)?,
        };
        info!(target: "relazioni::registry", "dataset registry built from {}", origin);
        Ok(reg)
    }

    pub fn embedded() -> DatasetResult<Self> { Self::load(&EmbeddedSource) }

    pub fn get(&self, mode: DatasetMode) -> &RelationTable {
        match mode {
            DatasetMode::All => &self.all,
            DatasetMode::Personaggi => &self.personaggi,
            DatasetMode::Luoghi => &self.luoghi,
        }
    }

    /// Resolve a free-form mode string, then look it up.
    pub fn lookup(&self, mode: &str) -> DatasetResult<&RelationTable> {
        Ok(self.get(mode.parse()?))
    }

    pub fn modes(&self) -> [DatasetMode; 3] { DatasetMode::ALL }

    pub fn iter(&self) -> impl Iterator<Item = (DatasetMode, &RelationTable)> + '_ {
        DatasetMode::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    pub fn len(&self) -> usize { DatasetMode::ALL.len() }

    pub fn is_empty(&self) -> bool { false }

    pub fn summary(&self) -> Vec<ModeSummary> {
        self.iter()
            .map(|(mode, t)| ModeSummary { mode, entities: t.len(), links: t.link_count() })
            .collect()
    }
}

static DATASETS: OnceCell<DatasetRegistry> = OnceCell::new();

/// Install the process-wide registry. Fails if one is already installed.
pub fn install(registry: DatasetRegistry) -> DatasetResult<()> {
    DATASETS.set(registry).map_err(|_| {
        DatasetError::conflict("registry_installed", "dataset registry is already initialized")
    })
}

/// Process-wide registry; built from the embedded documents on first use
/// unless `install` ran earlier.
pub fn datasets() -> DatasetResult<&'static DatasetRegistry> {
    DATASETS.get_or_try_init(DatasetRegistry::embedded)
}
