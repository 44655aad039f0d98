use super::Error;

/// Error when an association table would be emitted twice.
#[derive(Debug)]
pub(super) struct DuplicateAssociationError {
    pub(super) name: Box<str>,
    pub(super) pair: (Box<str>, Box<str>),
}

impl std::error::Error for DuplicateAssociationError {}

impl core::fmt::Display for DuplicateAssociationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate association table `{}` for pair ({}, {})",
            self.name, self.pair.0, self.pair.1
        )
    }
}

impl Error {
    /// Creates a duplicate association error.
    pub fn duplicate_association(name: impl Into<String>, pair: (&str, &str)) -> Error {
        Error::from(super::ErrorKind::DuplicateAssociation(
            DuplicateAssociationError {
                name: name.into().into(),
                pair: (pair.0.into(), pair.1.into()),
            },
        ))
    }

    /// Returns `true` if this error is a duplicate association error.
    pub fn is_duplicate_association(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateAssociation(_))
    }
}
