use super::*;

use crate::schema::{Assoc, KeyPart, Provenance, TableConstraint};

/// A pending association table, keyed in the context by the sorted pair of
/// table names.
pub(super) struct Association {
    name: String,

    /// Business-key column an `__assoc` named on each side of the pair
    keys: [Option<String>; 2],

    /// First column that declared the association
    provenance: Provenance,

    statement: usize,
}

impl<'a> Rewriter<'a> {
    /// Records a many-to-many association declared by `stmt.column`.
    pub(super) fn associate(
        &self,
        stmt: &TableStatement,
        column: &ColumnDef,
        assoc: &Assoc,
        cx: &mut Context<'a>,
    ) -> Result<()> {
        let target = self.resolve(stmt, column, &assoc.table)?;
        let target_column = target.column(&assoc.column).ok_or_else(|| {
            Error::unresolved_type(
                &stmt.name,
                &column.name,
                format!("{}.{}", assoc.table, assoc.column),
            )
        })?;

        if target_column.ty.is_container() {
            return Err(Error::invalid_relation(
                &stmt.name,
                &column.name,
                format!(
                    "association target `{}.{}` is not a scalar column",
                    assoc.table, assoc.column
                ),
            ));
        }

        let pair = if stmt.name <= target.name {
            (stmt.name.clone(), target.name.clone())
        } else {
            (target.name.clone(), stmt.name.clone())
        };

        // The side of the pair whose business key `assoc` names
        let sides: &[usize] = if pair.0 == pair.1 {
            &[0, 1]
        } else if pair.0 == target.name {
            &[0]
        } else {
            &[1]
        };

        let deduplicated = cx.associations.contains_key(&pair);
        let association = cx
            .associations
            .entry(pair.clone())
            .or_insert_with(|| Association {
                name: format!("{}_{}_assoc", pair.0, pair.1),
                keys: [None, None],
                provenance: Provenance {
                    table: stmt.name.clone(),
                    field: column.name.clone(),
                },
                statement: stmt.span.statement,
            });

        // A second key column for the same pair would need a second table
        for &side in sides {
            if association.keys[side]
                .as_ref()
                .is_some_and(|key| *key != assoc.column)
            {
                return Err(Error::duplicate_association(
                    &association.name,
                    (&pair.0, &pair.1),
                ));
            }

            association.keys[side] = Some(assoc.column.clone());
        }

        tracing::debug!(
            association = %association.name,
            table = %stmt.name,
            field = %column.name,
            deduplicated,
            "association"
        );

        Ok(())
    }
}

impl<'a> Context<'a> {
    /// Builds the association tables, each with the declaration position
    /// it follows: the later of its two tables.
    pub(super) fn finish(&mut self) -> Result<Vec<(usize, TableStatement)>> {
        let associations = std::mem::take(&mut self.associations);
        let mut ret = Vec::with_capacity(associations.len());

        for ((a, b), association) in associations {
            let Association {
                name,
                keys: [left_key, right_key],
                provenance,
                statement,
            } = association;

            let left = self.lookup(&a, &provenance)?;
            let right = self.lookup(&b, &provenance)?;
            let left_key = business_key(left, left_key.as_deref(), &provenance)?;
            let right_key = business_key(right, right_key.as_deref(), &provenance)?;

            self.claim(&name, statement)
                .map_err(|_| Error::duplicate_association(&name, (&a, &b)))?;

            let right_column = if a == b {
                format!("related_{b}_code")
            } else {
                format!("{b}_code")
            };

            let mut table = TableStatement::new(name);
            table.columns = vec![
                link::surrogate_id(),
                reference_column(format!("{a}_code"), left_key),
                reference_column(right_column, right_key),
            ];
            table.constraints = vec![TableConstraint::PrimaryKey {
                columns: vec![KeyPart::new("id")],
            }];
            table.provenance = Some(provenance);

            // Placed after the later of its two tables
            let (position, trigger) = match (self.registry.position(&a), self.registry.position(&b)) {
                (Some(left_pos), Some(right_pos)) if left_pos >= right_pos => (left_pos, left),
                (Some(_), Some(right_pos)) => (right_pos, right),
                _ => (usize::MAX, right),
            };
            table.span = trigger.span;

            tracing::debug!(table = %table.name, "synthesized association table");

            ret.push((position, table));
        }

        Ok(ret)
    }

    fn lookup(&self, name: &str, provenance: &Provenance) -> Result<&'a TableStatement> {
        self.registry
            .resolve(name)
            .ok_or_else(|| Error::unresolved_type(&provenance.table, &provenance.field, name))
    }
}

/// The column association rows reference on `table`: the column an
/// `__assoc` named, else the table's common code, else its single primary
/// key column.
fn business_key<'t>(
    table: &'t TableStatement,
    named: Option<&str>,
    provenance: &Provenance,
) -> Result<&'t ColumnDef> {
    let single_pk = match table.primary_key()[..] {
        [pk] => Some(pk.to_string()),
        _ => None,
    };

    named
        .map(str::to_string)
        .or_else(|| table.common_code.clone())
        .or(single_pk)
        .and_then(|name| table.column(&name))
        .ok_or_else(|| {
            Error::invalid_relation(
                &provenance.table,
                &provenance.field,
                format!("table `{}` has no business key", table.name),
            )
        })
}
