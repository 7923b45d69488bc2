//! Element id parsing errors

/// An element id that does not follow the `{table}_{role}[_{n}]` convention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// No `_` separator between table name and role.
    #[error("element id '{0}' has no '_' separator")]
    MissingSeparator(String),

    /// The table name part is empty.
    #[error("element id '{0}' has an empty table name")]
    EmptyTableName(String),

    /// A table name containing `_`, which would make its element ids ambiguous.
    #[error("table name '{0}' must not contain '_'")]
    InvalidTableName(String),

    /// The trailing number is not a non-negative integer.
    #[error("element id '{0}' does not end in a valid index")]
    InvalidIndex(String),

    /// The role part is not one the controller knows.
    #[error("element id '{0}' is not a table element")]
    Unrecognized(String),
}
