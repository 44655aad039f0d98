use super::Error;

/// Error when two statements declare a table-type with the same name.
#[derive(Debug)]
pub(super) struct DuplicateTypeError {
    pub(super) name: Box<str>,
    pub(super) first: usize,
    pub(super) statement: usize,
}

impl std::error::Error for DuplicateTypeError {}

impl core::fmt::Display for DuplicateTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate table-type `{}`: first declared by statement {}, redeclared by statement {}",
            self.name, self.first, self.statement
        )
    }
}

impl Error {
    /// Creates a duplicate type error.
    ///
    /// `first` is the statement that declared the name, `statement` the one
    /// that declared it again. Synthesized tables colliding with a declared
    /// name report the triggering statement as `statement`.
    pub fn duplicate_type(name: impl Into<String>, first: usize, statement: usize) -> Error {
        Error::from(super::ErrorKind::DuplicateType(DuplicateTypeError {
            name: name.into().into(),
            first,
            statement,
        }))
    }

    /// Returns `true` if this error is a duplicate type error.
    pub fn is_duplicate_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateType(_))
    }
}
