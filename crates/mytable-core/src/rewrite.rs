mod association;
use association::Association;

mod context;
use context::Context;

mod embed;

mod link;

use crate::{
    config::RewriteConfig,
    registry::TypeRegistry,
    schema::{primitive, ColumnDef, TableConstraint, TableStatement, TypeRef},
    Error, Result,
};

use std::collections::HashMap;

/// What became of a declared column that keys may still name.
enum Moved {
    /// Replaced by a single column with another name
    Renamed(String),

    /// Replaced by a synthesized table or by several columns
    Removed,

    /// Lowered to JSON storage, which cannot be indexed
    Json,
}

/// Lowers relationship columns into plain columns, JSON columns, foreign
/// keys and synthesized tables.
///
/// Statements are never modified in place; `rewrite` returns a new list with
/// every synthesized table placed after the statement that triggered it.
#[derive(Debug)]
pub struct Rewriter<'a> {
    registry: &'a TypeRegistry<'a>,
    config: &'a RewriteConfig,
}

impl<'a> Rewriter<'a> {
    pub fn new(registry: &'a TypeRegistry<'a>, config: &'a RewriteConfig) -> Rewriter<'a> {
        Rewriter { registry, config }
    }

    pub fn rewrite(&self, statements: &[TableStatement]) -> Result<Vec<TableStatement>> {
        let mut cx = Context::new(self.registry);

        // Each statement followed by the tables it triggered
        let mut slots = Vec::with_capacity(statements.len());

        for stmt in statements {
            let mut slot = vec![self.rewrite_table(stmt, &mut cx)?];
            slot.extend(cx.take_links());
            slots.push(slot);
        }

        for (position, table) in cx.finish()? {
            match slots.get_mut(position) {
                Some(slot) => slot.push(table),
                None => slots.push(vec![table]),
            }
        }

        let mut tables: Vec<TableStatement> = slots.into_iter().flatten().collect();

        if let Some(etl_column) = &self.config.etl_column {
            for table in &mut tables {
                if !table.has_column(etl_column) {
                    table
                        .columns
                        .push(ColumnDef::new(etl_column.clone(), TypeRef::scalar("DATETIME")));
                }
            }
        }

        tracing::debug!(
            input = statements.len(),
            output = tables.len(),
            "rewrote statements"
        );

        Ok(tables)
    }

    fn rewrite_table(&self, stmt: &TableStatement, cx: &mut Context<'a>) -> Result<TableStatement> {
        let mut table = TableStatement {
            columns: Vec::with_capacity(stmt.columns.len()),
            ..stmt.clone()
        };

        // Columns that did not survive under their declared name
        let mut moved = HashMap::new();

        for column in &stmt.columns {
            // Many-to-many: keep the denormalized keys as JSON
            if let Some(assoc) = &column.modifiers.assoc {
                self.associate(stmt, column, assoc, cx)?;
                table.columns.push(json_column(stmt, column)?);
                moved.insert(column.name.as_str(), Moved::Json);
                continue;
            }

            // One-to-many: the column becomes a link table
            if let Some(child) = column.ty.list_element().and_then(TypeRef::type_reference) {
                self.resolve(stmt, column, child)?;
                let link = self.link_table(stmt, column, cx)?;
                cx.push_link(link);
                moved.insert(column.name.as_str(), Moved::Removed);
                continue;
            }

            if column.modifiers.lift {
                tracing::trace!(table = %stmt.name, column = %column.name, "promoted column kept");
                table.columns.push(column.clone());
                continue;
            }

            if let Some(target) = column.ty.type_reference() {
                if let Some(fields) = self.config.simplify.get(target) {
                    let columns = self.simplify(stmt, column, target, fields)?;
                    if let [single] = &columns[..] {
                        moved.insert(column.name.as_str(), Moved::Renamed(single.name.clone()));
                    } else {
                        moved.insert(column.name.as_str(), Moved::Removed);
                    }
                    table.columns.extend(columns);
                } else {
                    let reference = self.embed(stmt, column, target, &mut table)?;
                    moved.insert(column.name.as_str(), Moved::Renamed(reference));
                }
                continue;
            }

            if column.ty.is_container() || self.config.is_structured(&column.name) {
                table.columns.push(json_column(stmt, column)?);
                moved.insert(column.name.as_str(), Moved::Json);
                continue;
            }

            match column.ty.as_scalar().and_then(|s| primitive::element_storage(&s.name)) {
                Some(storage) => table.columns.push(column.retyped(TypeRef::Scalar(storage))),
                None => table.columns.push(column.clone()),
            }
        }

        remap_keys(stmt, &moved, &mut table)?;

        Ok(table)
    }

    /// Looks up a table-type referenced by `stmt.column`.
    fn resolve(
        &self,
        stmt: &TableStatement,
        column: &ColumnDef,
        name: &str,
    ) -> Result<&'a TableStatement> {
        self.registry
            .resolve(name)
            .ok_or_else(|| Error::unresolved_type(&stmt.name, &column.name, name))
    }
}

/// The SQL type a column of type `ty` is stored as.
fn storage_type(ty: &TypeRef) -> TypeRef {
    match ty {
        TypeRef::Scalar(scalar) => match primitive::element_storage(&scalar.name) {
            Some(storage) => TypeRef::Scalar(storage),
            None => ty.clone(),
        },
        _ => TypeRef::json(),
    }
}

/// A column referencing `key`: same storage type, no key attributes.
fn reference_column(name: String, key: &ColumnDef) -> ColumnDef {
    ColumnDef::new(name, storage_type(&key.ty))
}

/// The column foreign keys into `table` point at.
fn id_column<'t>(
    table: &'t TableStatement,
    stmt: &TableStatement,
    column: &ColumnDef,
) -> Result<&'t ColumnDef> {
    table.id_column().ok_or_else(|| {
        Error::invalid_relation(
            &stmt.name,
            &column.name,
            format!("table `{}` has no single-column key", table.name),
        )
    })
}

/// A column lowered to JSON storage.
///
/// JSON columns cannot carry a literal default or be indexed, so defaults
/// are dropped and inline keys are rejected.
fn json_column(stmt: &TableStatement, column: &ColumnDef) -> Result<ColumnDef> {
    if column.modifiers.primary_key || column.modifiers.unique {
        return Err(Error::invalid_relation(
            &stmt.name,
            &column.name,
            "a column stored as JSON cannot be a key",
        ));
    }

    let mut def = column.retyped(TypeRef::json());
    def.default = None;
    def.on_update = None;
    def.modifiers.auto_increment = false;
    Ok(def)
}

/// Points keys, indexes and the common code marker at the columns that
/// replaced the declared ones.
fn remap_keys(
    stmt: &TableStatement,
    moved: &HashMap<&str, Moved>,
    table: &mut TableStatement,
) -> Result<()> {
    let remap = |name: &mut String| -> Result<()> {
        let reason = match moved.get(name.as_str()) {
            None => return Ok(()),
            Some(Moved::Renamed(renamed)) => {
                *name = renamed.clone();
                return Ok(());
            }
            Some(Moved::Removed) => "is replaced by a synthesized table or several columns",
            Some(Moved::Json) => "is stored as JSON",
        };

        Err(Error::invalid_relation(
            &stmt.name,
            name.as_str(),
            format!("`{name}` {reason} and cannot be used in a key or index"),
        ))
    };

    for constraint in &mut table.constraints {
        match constraint {
            TableConstraint::PrimaryKey { columns }
            | TableConstraint::UniqueKey { columns, .. }
            | TableConstraint::Index { columns, .. } => {
                for part in columns {
                    remap(&mut part.column)?;
                }
            }
            TableConstraint::ForeignKey(fk) => {
                for column in &mut fk.columns {
                    remap(column)?;
                }
            }
        }
    }

    if let Some(common_code) = &mut table.common_code {
        remap(common_code)?;
    }

    Ok(())
}
