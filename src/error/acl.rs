use thiserror::Error;

/// Ошибки, возникающие при разборе и построении ACL-правил.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AclError {
    #[error("Invalid rule format: {0}")]
    InvalidRuleFormat(String),

    #[error("Unknown identifier prefix: {0}")]
    UnknownIdentifierPrefix(char),

    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    #[error("Unknown right: {0}")]
    UnknownRight(String),

    #[error("Invalid identifier id: {0}")]
    InvalidId(String),

    #[error("Rule must contain at least one resource kind")]
    EmptyResourceKinds,

    #[error("Rule must contain at least one right")]
    EmptyRights,
}

pub type AclResult<T> = Result<T, AclError>;
