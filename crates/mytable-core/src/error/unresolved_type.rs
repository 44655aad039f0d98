use super::Error;

/// Error when a relationship or embedded reference names an unknown table-type.
#[derive(Debug)]
pub(super) struct UnresolvedTypeError {
    pub(super) table: Box<str>,
    pub(super) field: Box<str>,
    pub(super) missing: Box<str>,
}

impl std::error::Error for UnresolvedTypeError {}

impl core::fmt::Display for UnresolvedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved type `{}` referenced by `{}.{}`",
            self.missing, self.table, self.field
        )
    }
}

impl Error {
    /// Creates an unresolved type error.
    ///
    /// `missing` is either a table-type name or a `Table.column` path.
    pub fn unresolved_type(
        table: impl Into<String>,
        field: impl Into<String>,
        missing: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvedType(UnresolvedTypeError {
            table: table.into().into(),
            field: field.into().into(),
            missing: missing.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved type error.
    pub fn is_unresolved_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedType(_))
    }
}
