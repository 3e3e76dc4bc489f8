//! Dataset modes: the closed set of views the registry exposes.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetMode {
    /// Characters and places together.
    All,
    /// Character-to-character relations.
    Personaggi,
    /// Character-to-place relations.
    Luoghi,
}

impl DatasetMode {
    pub const ALL: [DatasetMode; 3] = [DatasetMode::All, DatasetMode::Personaggi, DatasetMode::Luoghi];

    pub const fn as_str(self) -> &'static str {
        match self {
            DatasetMode::All => "all",
            DatasetMode::Personaggi => "personaggi",
            DatasetMode::Luoghi => "luoghi",
        }
    }

    /// Default file name of the JSON document backing this mode.
    pub const fn resource_name(self) -> &'static str {
        match self {
            DatasetMode::All => "relazioni.json",
            DatasetMode::Personaggi => "protagonisti_relazioni.json",
            DatasetMode::Luoghi => "protagonisti_luoghi_relazioni.json",
        }
    }
}

impl Display for DatasetMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetMode {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        DatasetMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| {
                DatasetError::user(
                    "unknown_mode".to_string(),
                    format!("unknown dataset mode '{}' (expected one of: all, personaggi, luoghi)", key),
                )
            })
    }
}
