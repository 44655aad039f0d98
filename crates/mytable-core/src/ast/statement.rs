use super::*;

/// Leading keywords of statements that are recognized and discarded.
const SKIPPED: &[&str] = &["CREATE", "DROP", "USE", "SET"];

#[derive(Debug)]
pub(crate) enum Statement {
    CreateTable(Box<CreateTable>),

    /// `START TRANSACTION` or `BEGIN`
    Begin,

    Commit,

    /// `DROP`, `USE`, `SET`, `CREATE DATABASE` and friends
    Skipped(Ident),
}

impl Parse for Statement {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        if p.is_next::<kw::Create>() && (p.is_nth::<kw::Table>(1) || p.is_nth::<kw::Temporary>(1)) {
            return p.parse().map(Statement::CreateTable);
        }

        if p.is_next::<kw::Start>() || p.is_next::<kw::Begin>() {
            p.skip_statement();
            return Ok(Statement::Begin);
        }

        if p.is_next::<kw::Commit>() {
            p.skip_statement();
            return Ok(Statement::Commit);
        }

        match p.peek::<Ident>() {
            Some(ident) if SKIPPED.iter().any(|keyword| ident.is_keyword(keyword)) => {
                p.skip_statement();
                Ok(Statement::Skipped(ident))
            }
            _ => Err(p.unexpected("a statement")),
        }
    }
}
