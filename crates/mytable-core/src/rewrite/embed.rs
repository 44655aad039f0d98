use super::*;

use crate::schema::{ForeignKey, ReferentialAction, TableConstraint};

impl<'a> Rewriter<'a> {
    /// Replaces an embedded table-type column with `{field}_id` and a
    /// cascading foreign key named after the field.
    pub(super) fn embed(
        &self,
        stmt: &TableStatement,
        column: &ColumnDef,
        target: &str,
        table: &mut TableStatement,
    ) -> Result<String> {
        let target = self.resolve(stmt, column, target)?;
        let key = id_column(target, stmt, column)?;
        let name = format!("{}_id", column.name);

        if stmt.has_column(&name) {
            return Err(Error::invalid_relation(
                &stmt.name,
                &column.name,
                format!("column `{name}` already exists"),
            ));
        }

        let mut reference = reference_column(name.clone(), key);
        reference.nullable = column.nullable;
        reference.comment = column.comment.clone();
        reference.modifiers.unique = column.modifiers.unique;
        reference.modifiers.primary_key = column.modifiers.primary_key;
        table.columns.push(reference);

        table
            .constraints
            .push(TableConstraint::ForeignKey(ForeignKey {
                name: Some(column.name.clone()),
                columns: vec![name.clone()],
                ref_table: target.name.clone(),
                ref_columns: vec![key.name.clone()],
                on_delete: Some(ReferentialAction::Cascade),
                on_update: None,
            }));

        tracing::debug!(
            table = %stmt.name,
            field = %column.name,
            target = %target.name,
            "embedded reference"
        );

        Ok(name)
    }

    /// Replaces an embedded table-type column with fields copied from the
    /// type's template. A single field keeps the column's name; several are
    /// named `{column}_{field}`.
    pub(super) fn simplify(
        &self,
        stmt: &TableStatement,
        column: &ColumnDef,
        target: &str,
        fields: &[String],
    ) -> Result<Vec<ColumnDef>> {
        let template = self.resolve(stmt, column, target)?;

        fields
            .iter()
            .map(|field| {
                let source = template.column(field).ok_or_else(|| {
                    Error::unresolved_type(&stmt.name, &column.name, format!("{target}.{field}"))
                })?;

                if source.ty.type_reference().is_some() {
                    return Err(Error::invalid_relation(
                        &stmt.name,
                        &column.name,
                        format!("simplified field `{target}.{field}` is not primitive"),
                    ));
                }

                let name = if fields.len() == 1 {
                    column.name.clone()
                } else {
                    format!("{}_{}", column.name, field)
                };

                if fields.len() > 1 && stmt.has_column(&name) {
                    return Err(Error::invalid_relation(
                        &stmt.name,
                        &column.name,
                        format!("column `{name}` already exists"),
                    ));
                }

                let mut def = ColumnDef::new(name, storage_type(&source.ty));
                def.nullable = column.nullable;
                def.comment = column.comment.clone();
                Ok(def)
            })
            .collect()
    }
}
