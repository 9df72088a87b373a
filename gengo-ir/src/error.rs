use thiserror::Error;

/// Result type for IR operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A type node that does not describe one of the three known shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown type kind '{kind}', expected one of 'ident', 'struct', 'array'")]
    UnknownKind { kind: String },

    #[error("type kind '{kind}' cannot carry fields")]
    UnexpectedFields { kind: &'static str },

    #[error("type kind 'struct' cannot carry an identifier (got '{ident}')")]
    UnexpectedIdent { ident: String },
}
