mod ast;

pub mod config;
pub use config::{ParseConfig, RewriteConfig};

mod error;
pub use error::{Diagnostic, Error, Result};

pub mod registry;
pub use registry::TypeRegistry;

pub mod rewrite;
pub use rewrite::Rewriter;

pub mod schema;

use schema::{Builder, TableStatement};

/// Parses extended-dialect source text into table statements.
///
/// Statements other than `CREATE TABLE` are skipped. A malformed statement
/// does not stop parsing of the following ones, but any failure fails the
/// whole run with a syntax error listing every malformed statement.
pub fn parse(src: &str, config: &ParseConfig) -> Result<Vec<TableStatement>> {
    let script = ast::from_str(src, true);
    Builder::new(true, config.require_primary_key).from_ast(script)
}

/// Parses standard SQL only: containers, `__` directives and non-SQL type
/// names are syntax errors.
pub fn parse_standard(src: &str) -> Result<Vec<TableStatement>> {
    let script = ast::from_str(src, false);
    Builder::new(false, false).from_ast(script)
}
