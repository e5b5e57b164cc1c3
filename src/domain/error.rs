//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Malformed tower shape, detected during construction.
/// Fatal to the analysis; surfaced to the caller, never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("empty input: no records to build a tower from")]
    EmptyInput,

    #[error("duplicate record for '{0}'")]
    DuplicateRecord(String),

    #[error("'{parent}' references unknown program '{child}'")]
    DanglingChild { parent: String, child: String },

    #[error("'{child}' is referenced by more than one program")]
    SharedChild { child: String },

    #[error("no root candidate: every program is referenced as a child")]
    NoRoot,

    #[error("not reachable from the root: {}", .0.join(", "))]
    UnreachablePrograms(Vec<String>),

    #[error("multiple root candidates: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),
}

/// Errors raised by analysis over a constructed tower.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Query for a name not in the tower. Indicates a caller bug, not
    /// user-input error.
    #[error("unknown program '{0}'")]
    NotFound(String),

    /// The "exactly one wrong node" assumption does not hold: sibling
    /// weights admit no single culprit, so no correction is reported.
    #[error(
        "cannot identify a single unbalanced program under '{node}': sibling subtree weights are [{}]",
        .weights.iter().map(|w| w.to_string()).collect::<Vec<_>>().join(", ")
    )]
    AmbiguousImbalance { node: String, weights: Vec<i64> },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
