//! Unified error model for dataset loading and lookup.
//! Every fallible path in the crate (sources, registry, global accessor, CLI)
//! returns `DatasetError`, which carries a stable machine code plus a message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatasetError {
    #[error("{code}: {message}")]
    UserInput { code: String, message: String },
    #[error("{code}: {message}")]
    NotFound { code: String, message: String },
    #[error("{code}: {message}")]
    Conflict { code: String, message: String },
    #[error("{code}: {message}")]
    Io { code: String, message: String },
    #[error("{code}: {message}")]
    Parse { code: String, message: String },
    #[error("{code}: {message}")]
    Internal { code: String, message: String },
}

impl DatasetError {
    pub fn code_str(&self) -> &str {
        match self {
            DatasetError::UserInput { code, .. }
            | DatasetError::NotFound { code, .. }
            | DatasetError::Conflict { code, .. }
            | DatasetError::Io { code, .. }
            | DatasetError::Parse { code, .. }
            | DatasetError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DatasetError::UserInput { message, .. }
            | DatasetError::NotFound { message, .. }
            | DatasetError::Conflict { message, .. }
            | DatasetError::Io { message, .. }
            | DatasetError::Parse { message, .. }
            | DatasetError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<S: Into<String>>(code: S, msg: S) -> Self { DatasetError::UserInput { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { DatasetError::NotFound { code: code.into(), message: msg.into() } }
    pub fn conflict<S: Into<String>>(code: S, msg: S) -> Self { DatasetError::Conflict { code: code.into(), message: msg.into() } }
    pub fn io<S: Into<String>>(code: S, msg: S) -> Self { DatasetError::Io { code: code.into(), message: msg.into() } }
    pub fn parse<S: Into<String>>(code: S, msg: S) -> Self { DatasetError::Parse { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { DatasetError::Internal { code: code.into(), message: msg.into() } }

    /// Prefix the message with a context label, keeping variant and code.
    pub fn with_context(self, ctx: &str) -> Self {
        let wrap = |m: String| format!("{}: {}", ctx, m);
        match self {
            DatasetError::UserInput { code, message } => DatasetError::UserInput { code, message: wrap(message) },
            DatasetError::NotFound { code, message } => DatasetError::NotFound { code, message: wrap(message) },
            DatasetError::Conflict { code, message } => DatasetError::Conflict { code, message: wrap(message) },
            DatasetError::Io { code, message } => DatasetError::Io { code, message: wrap(message) },
            DatasetError::Parse { code, message } => DatasetError::Parse { code, message: wrap(message) },
            DatasetError::Internal { code, message } => DatasetError::Internal { code, message: wrap(message) },
        }
    }

    /// Map to a process exit code for the command-line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            DatasetError::UserInput { .. } => 2,
            DatasetError::NotFound { .. } => 3,
            DatasetError::Conflict { .. } => 4,
            DatasetError::Io { .. } => 5,
            DatasetError::Parse { .. } => 6,
            DatasetError::Internal { .. } => 1,
        }
    }
}

pub type DatasetResult<T> = Result<T, DatasetError>;

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => DatasetError::not_found("resource_missing".to_string(), err.to_string()),
            _ => DatasetError::io("io_error".to_string(), err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse { code: "invalid_json".into(), message: err.to_string() }
    }
}

impl From<anyhow::Error> for DatasetError {
    fn from(err: anyhow::Error) -> Self {
        // Default mapping: treat as Internal unless downcasted elsewhere
        match err.downcast::<DatasetError>() {
            Ok(e) => e,
            Err(other) => DatasetError::Internal { code: "internal_error".into(), message: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_mapping() {
        assert_eq!(DatasetError::user("bad_input", "oops").exit_code(), 2);
        assert_eq!(DatasetError::not_found("not_found", "missing").exit_code(), 3);
        assert_eq!(DatasetError::conflict("conflict", "dup").exit_code(), 4);
        assert_eq!(DatasetError::io("io", "io").exit_code(), 5);
        assert_eq!(DatasetError::parse("invalid_json", "eof").exit_code(), 6);
        assert_eq!(DatasetError::internal("internal", "panic").exit_code(), 1);
    }

    #[test]
    fn display_is_code_and_message() {
        let e = DatasetError::not_found("unknown_entity", "no entity 'Griso'");
        assert_eq!(e.to_string(), "unknown_entity: no entity 'Griso'");
        assert_eq!(e.code_str(), "unknown_entity");
        assert_eq!(e.message(), "no entity 'Griso'");
    }

    #[test]
    fn io_not_found_maps_to_not_found() {
        let e: DatasetError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, DatasetError::NotFound { .. }));
        let e: DatasetError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(e, DatasetError::Io { .. }));
    }

    #[test]
    fn json_error_maps_to_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: DatasetError = err.into();
        assert_eq!(e.code_str(), "invalid_json");
    }

    #[test]
    fn anyhow_roundtrip_keeps_variant() {
        let e: DatasetError = anyhow::Error::new(DatasetError::conflict("x", "y")).into();
        assert!(matches!(e, DatasetError::Conflict { .. }));
        let e: DatasetError = anyhow::anyhow!("boom").into();
        assert!(matches!(e, DatasetError::Internal { .. }));
    }

    #[test]
    fn context_prefixes_message() {
        let e = DatasetError::parse("invalid_json", "eof").with_context("luoghi");
        assert_eq!(e.message(), "luoghi: eof");
        assert_eq!(e.code_str(), "invalid_json");
    }

    #[test]
    fn serializes_with_type_tag() {
        let v = serde_json::to_value(DatasetError::user("unknown_mode", "bad")).unwrap();
        assert_eq!(v["type"], "user_input");
        assert_eq!(v["code"], "unknown_mode");
    }
}
