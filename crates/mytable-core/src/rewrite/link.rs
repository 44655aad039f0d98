use super::*;

use crate::schema::{ForeignKey, KeyPart, Provenance, TableConstraint};

impl<'a> Rewriter<'a> {
    /// Materializes a one-to-many `List<Child>` column as `{Parent}_{field}`:
    /// a surrogate id and a foreign key back to the parent, named after the
    /// field.
    pub(super) fn link_table(
        &self,
        parent: &TableStatement,
        column: &ColumnDef,
        cx: &mut Context<'a>,
    ) -> Result<TableStatement> {
        let parent_key = id_column(parent, parent, column)?;
        let name = format!("{}_{}", parent.name, column.name);

        cx.claim(&name, parent.span.statement)
            .map_err(|first| Error::duplicate_type(&name, first, parent.span.statement))?;

        let parent_ref = format!("{}_id", parent.name);

        let mut table = TableStatement::new(name);
        table.columns = vec![
            surrogate_id(),
            reference_column(parent_ref.clone(), parent_key),
        ];
        table.constraints = vec![
            TableConstraint::PrimaryKey {
                columns: vec![KeyPart::new("id")],
            },
            TableConstraint::ForeignKey(ForeignKey {
                name: Some(column.name.clone()),
                columns: vec![parent_ref],
                ref_table: parent.name.clone(),
                ref_columns: vec![parent_key.name.clone()],
                on_delete: None,
                on_update: None,
            }),
        ];
        table.provenance = Some(Provenance {
            table: parent.name.clone(),
            field: column.name.clone(),
        });
        table.span = parent.span;

        tracing::debug!(
            table = %table.name,
            parent = %parent.name,
            field = %column.name,
            "synthesized link table"
        );

        Ok(table)
    }
}

/// `id INT NOT NULL AUTO_INCREMENT`
pub(super) fn surrogate_id() -> ColumnDef {
    ColumnDef::new("id", TypeRef::scalar("INT"))
        .not_null()
        .auto_increment()
}
