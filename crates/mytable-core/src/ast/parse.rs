mod lexer;
use lexer::Lexer;
pub(crate) use lexer::Pos;

mod parser;
pub(crate) use parser::Parser;

pub(crate) type Result<T> = std::result::Result<T, crate::Error>;

use super::*;
use crate::Diagnostic;

pub(crate) trait Parse: Sized {
    fn parse(parser: &mut Parser<'_>) -> Result<Self>;
}

/// Syntax that can be recognized from its first token alone.
pub(crate) trait Peek: Parse {
    fn from_token(token: Option<&Token>) -> Option<Self>;

    fn is_next(token: Option<&Token>) -> bool {
        Self::from_token(token).is_some()
    }
}

/// Every `CREATE TABLE` found in a source document, with the diagnostics of
/// the statements that failed to parse.
#[derive(Debug)]
pub(crate) struct Script {
    pub statements: Vec<(usize, CreateTable)>,
    pub diagnostics: Vec<Diagnostic>,
}

pub(crate) fn from_str(src: &str, extensions: bool) -> Script {
    let mut parser = Parser::new(Lexer::new(src), extensions);
    let mut statements = vec![];
    let mut diagnostics = vec![];

    loop {
        // Empty statements
        while parser.is_next::<SemiColon>() {
            parser.next_token();
        }

        if parser.is_eof() {
            break;
        }

        match parser.parse::<Statement>() {
            Ok(Statement::CreateTable(stmt)) => {
                statements.push((parser.statement(), *stmt));
            }
            Ok(stmt) => {
                tracing::trace!(statement = parser.statement(), ?stmt, "skipped statement");
            }
            Err(err) => {
                tracing::warn!(statement = parser.statement(), %err, "recovering");
                diagnostics.extend(err.diagnostics().iter().cloned());
                parser.recover();
            }
        }

        parser.next_statement();
    }

    Script {
        statements,
        diagnostics,
    }
}

impl<T: Peek> Parse for Option<T> {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        if p.is_next::<T>() {
            Ok(Some(p.parse()?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Parse> Parse for Box<T> {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        Ok(Box::new(p.parse()?))
    }
}
