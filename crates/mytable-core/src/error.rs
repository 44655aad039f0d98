mod duplicate_association;
mod duplicate_type;
mod invalid_relation;
mod syntax;
mod unresolved_type;

use duplicate_association::DuplicateAssociationError;
use duplicate_type::DuplicateTypeError;
use invalid_relation::InvalidRelationError;
use std::sync::Arc;
use syntax::SyntaxError;
use unresolved_type::UnresolvedTypeError;

pub use syntax::Diagnostic;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error produced while transpiling a schema.
///
/// Every error aborts the run; there is no partial output. Errors carry the
/// statement, table and field identifiers needed to point a user at the
/// offending source.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Syntax(SyntaxError),
    DuplicateType(DuplicateTypeError),
    UnresolvedType(UnresolvedTypeError),
    DuplicateAssociation(DuplicateAssociationError),
    InvalidRelation(InvalidRelationError),
}

impl Error {
    /// Index of the source statement the error points at, when known.
    pub fn statement(&self) -> Option<usize> {
        match self.kind() {
            ErrorKind::Syntax(err) => err.diagnostics.first().map(|d| d.statement),
            ErrorKind::DuplicateType(err) => Some(err.statement),
            _ => None,
        }
    }

    /// Name of the table the error points at, when known.
    pub fn table(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::DuplicateType(err) => Some(&err.name),
            ErrorKind::UnresolvedType(err) => Some(&err.table),
            ErrorKind::InvalidRelation(err) => Some(&err.table),
            _ => None,
        }
    }

    /// Name of the column the error points at, when known.
    pub fn field(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::UnresolvedType(err) => Some(&err.field),
            ErrorKind::InvalidRelation(err) => Some(&err.field),
            _ => None,
        }
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Syntax(err) => core::fmt::Display::fmt(err, f),
            DuplicateType(err) => core::fmt::Display::fmt(err, f),
            UnresolvedType(err) => core::fmt::Display::fmt(err, f),
            DuplicateAssociation(err) => core::fmt::Display::fmt(err, f),
            InvalidRelation(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(kind),
        }
    }
}
