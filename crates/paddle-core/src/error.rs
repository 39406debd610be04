//! Error types for schema values.

/// Errors raised when a schema value is built from an untrusted string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The value is not part of a closed enumeration.
    #[error("unknown {kind}: {value}")]
    UnknownCode {
        /// Which enumeration rejected the value.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An identifier was empty.
    #[error("empty {kind} identifier")]
    EmptyId {
        /// Which identifier type was empty.
        kind: &'static str,
    },

    /// An identifier cannot address a single path segment (`.` or `..`).
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidId {
        /// Which identifier type was rejected.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Errors raised while following pagination cursors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// The page claims more results but holds no item to continue after.
    #[error("page {request_id} reports has_more but contains no items")]
    EmptyPageWithMore {
        /// Request id of the offending page.
        request_id: String,
    },
}
