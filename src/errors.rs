//! Error types shared across the dashboard.

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, BloatkillError>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum BloatkillError {
    #[error("folder `{key}` is not in the catalog")]
    FolderNotFound { key: String },

    #[error("unknown danger tag `{tag}`")]
    UnknownDanger { tag: String },

    #[error("catalog integrity violation: {details}")]
    DataIntegrity { details: String },

    #[error("clipboard unavailable: {details}")]
    ClipboardUnavailable { details: String },

    #[error("invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("configuration parse failure in {path}: {details}")]
    ConfigParse { path: PathBuf, details: String },

    #[error("IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logging setup failed: {details}")]
    Logging { details: String },

    #[error("window failure: {0}")]
    Gui(#[from] eframe::Error),
}

impl BloatkillError {
    /// True for defects in the authored catalog rather than runtime conditions.
    pub const fn is_authoring_defect(&self) -> bool {
        matches!(
            self,
            Self::FolderNotFound { .. } | Self::UnknownDanger { .. } | Self::DataIntegrity { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authoring_defects_are_classified() {
        assert!(BloatkillError::FolderNotFound { key: "x".into() }.is_authoring_defect());
        assert!(
            BloatkillError::DataIntegrity {
                details: "dup".into()
            }
            .is_authoring_defect()
        );
        assert!(
            !BloatkillError::ClipboardUnavailable {
                details: "denied".into()
            }
            .is_authoring_defect()
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let err = BloatkillError::UnknownDanger {
            tag: "extreme".into(),
        };
        assert_eq!(err.to_string(), "unknown danger tag `extreme`");
    }
}
