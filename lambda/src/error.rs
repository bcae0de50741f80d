use thiserror::Error;

/// Shape errors: the caller assembled an argument that does not fit the
/// operation. They are raised before any rewriting happens. Offending terms
/// and identifiers are carried in their rendered form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Expected a variable, found `{0}`")]
    NotAVariable(String),
    #[error("`{0}` is a shadow identifier and cannot be used as a fresh name")]
    ShadowName(String),
    #[error("Fresh name `{0}` ends in a prime and would read as a shadow identifier")]
    PrimedName(String),
    #[error("Found {needed} shadowed binders but only {supplied} fresh names were supplied")]
    FreshNamesExhausted { needed: usize, supplied: usize },
    #[error("Fresh name `{0}` already occurs in the term")]
    NameInUse(String),
    #[error("Fresh name `{0}` is supplied more than once")]
    DuplicateName(String),
    #[error("No normal form reached within {passes} reduction passes")]
    DidNotConverge { passes: usize },
}
pub type Result<T, E = Error> = std::result::Result<T, E>;
