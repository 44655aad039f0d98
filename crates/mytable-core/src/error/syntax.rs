use super::Error;

/// One malformed statement, located in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Zero-based index of the statement in the source.
    pub statement: usize,

    /// One-based line of the offending token.
    pub line: usize,

    /// One-based column of the offending token.
    pub column: usize,

    /// What the parser expected.
    pub message: String,
}

impl Diagnostic {
    pub fn new(statement: usize, line: usize, column: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            statement,
            line,
            column,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "statement {} (line {}, column {}): {}",
            self.statement, self.line, self.column, self.message
        )
    }
}

/// Error when one or more statements could not be parsed.
///
/// The parser recovers at the next statement separator, so a single run may
/// report several malformed statements at once.
#[derive(Debug)]
pub(super) struct SyntaxError {
    pub(super) diagnostics: Vec<Diagnostic>,
}

impl std::error::Error for SyntaxError {}

impl core::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("syntax error: ")?;

        let mut sep = "";
        for diagnostic in &self.diagnostics {
            write!(f, "{sep}{diagnostic}")?;
            sep = "; ";
        }

        Ok(())
    }
}

impl Error {
    /// Creates a syntax error from the collected diagnostics.
    pub fn syntax(diagnostics: Vec<Diagnostic>) -> Error {
        Error::from(super::ErrorKind::Syntax(SyntaxError { diagnostics }))
    }

    /// Returns `true` if this error is a syntax error.
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Syntax(_))
    }

    /// Diagnostics carried by a syntax error; empty for every other kind.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self.kind() {
            super::ErrorKind::Syntax(err) => &err.diagnostics,
            _ => &[],
        }
    }
}
