use thiserror::Error;

/// Errors raised while constructing a [`Store`](crate::Store).
///
/// Construction is the only fallible operation; field reads and writes never
/// fail. None of these are recovered internally -- they are programmer errors
/// in call-site data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The supplied props value is not an object of fields.
    #[error("store props must be an object, got {0}")]
    InvalidProps(String),

    /// The supplied props contain no fields.
    #[error("cannot create a store without props")]
    EmptyProps,

    /// The supplied props contain a field with the reserved name `state`.
    #[error("cannot assign reserved prop name \"state\"")]
    ReservedName,
}
