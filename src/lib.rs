//! relazioni: immutable registry of character and place relation tables.
//!
//! Each `DatasetMode` (`all`, `personaggi`, `luoghi`) maps to exactly one
//! `RelationTable`, loaded once through a pluggable `DatasetSource`.

pub mod error;
pub mod mode;
pub mod relation;
pub mod source;
pub mod registry;
pub mod config;
pub mod paths;
pub mod cli;

pub use error::{DatasetError, DatasetResult};
pub use mode::DatasetMode;
pub use registry::{datasets, DatasetRegistry};
pub use relation::RelationTable;
pub use source::DatasetSource;
