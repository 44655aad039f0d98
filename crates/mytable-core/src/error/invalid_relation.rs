use super::Error;

/// Error when a relationship resolves but cannot be materialized.
///
/// This occurs when:
/// - The referenced table has no single-column key to point a foreign key at
/// - The target column of an association is not a scalar
#[derive(Debug)]
pub(super) struct InvalidRelationError {
    pub(super) table: Box<str>,
    pub(super) field: Box<str>,
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidRelationError {}

impl core::fmt::Display for InvalidRelationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid relation `{}.{}`: {}",
            self.table, self.field, self.message
        )
    }
}

impl Error {
    /// Creates an invalid relation error.
    pub fn invalid_relation(
        table: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidRelation(InvalidRelationError {
            table: table.into().into(),
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid relation error.
    pub fn is_invalid_relation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRelation(_))
    }
}
