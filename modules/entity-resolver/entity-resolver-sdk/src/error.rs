//! Error types for the entity resolver module.

use thiserror::Error;

/// Errors raised by an entity storage engine.
#[derive(Debug, Error)]
pub enum EntityStorageError {
    /// The requested category is not registered with the storage engine.
    ///
    /// Seen by converters as a configuration error: a route declaring this
    /// category can never resolve.
    #[error("entity category not found: {kind}")]
    UnknownCategory {
        /// The category name that was requested.
        kind: String,
    },

    /// The backend failed while executing a query or loading entities.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors that can occur while converting route parameters.
#[derive(Debug, Error)]
pub enum ParamConverterError {
    /// Storage error, propagated unmodified.
    #[error(transparent)]
    Storage(#[from] EntityStorageError),

    /// The parameter declaration cannot be handled by the converter.
    #[error("invalid declaration for parameter '{name}': {reason}")]
    InvalidDeclaration {
        /// The route parameter name.
        name: String,
        /// Why the declaration was rejected.
        reason: String,
    },

    /// A converter claimed the parameter but found no matching object.
    #[error("parameter '{name}' could not be converted from '{value}'")]
    ParamNotConverted {
        /// The route parameter name.
        name: String,
        /// The raw path value.
        value: String,
    },
}

impl ParamConverterError {
    /// Returns true when the routing layer should answer with a "not found"
    /// class response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ParamNotConverted { .. }
                | Self::Storage(EntityStorageError::UnknownCategory { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_is_transparent() {
        let err: ParamConverterError = EntityStorageError::UnknownCategory {
            kind: "nonexistent_category".to_owned(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "entity category not found: nonexistent_category"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn backend_errors_are_not_not_found() {
        let err = ParamConverterError::from(EntityStorageError::Backend("boom".to_owned()));
        assert!(!err.is_not_found());
    }
}
