mod config;
pub use config::Config;

pub use mytable_core::{
    parse, parse_standard, schema, Diagnostic, Error, ParseConfig, Result, RewriteConfig,
    Rewriter, TypeRegistry,
};
pub use mytable_sql::{emit, EmitConfig, JsonType, Order};

use schema::TableStatement;

/// Transpiles extended-dialect source into a portable MySQL DDL script.
///
/// The whole document is parsed and every table-type registered before any
/// reference is resolved, so tables may reference types declared later.
/// Any error fails the run; no partial script is produced.
pub fn transpile(src: &str, config: &Config) -> Result<String> {
    let tables = rewrite(src, config)?;
    Ok(emit(&tables, &config.emit))
}

/// Runs the pipeline up to, but not including, emission.
pub fn rewrite(src: &str, config: &Config) -> Result<Vec<TableStatement>> {
    let statements = parse(src, &config.parse)?;
    let registry = TypeRegistry::register(&statements)?;
    let tables = Rewriter::new(&registry, &config.rewrite).rewrite(&statements)?;

    tracing::info!(
        declared = statements.len(),
        synthesized = tables.iter().filter(|table| table.is_synthesized()).count(),
        "transpiled"
    );

    Ok(tables)
}
