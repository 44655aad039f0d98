use crate::{schema::TableStatement, Error, Result};

use indexmap::{map::Entry, IndexMap};

/// Every declared table-type, by name.
///
/// Built once from the complete statement list so references resolve
/// regardless of declaration order. Lookup is exact and case-sensitive.
#[derive(Debug)]
pub struct TypeRegistry<'a> {
    types: IndexMap<&'a str, &'a TableStatement>,
}

impl<'a> TypeRegistry<'a> {
    /// Indexes `statements` by table name.
    ///
    /// Fails with a duplicate type error when two statements share a name.
    pub fn register(statements: &'a [TableStatement]) -> Result<TypeRegistry<'a>> {
        let mut types: IndexMap<&str, &TableStatement> =
            IndexMap::with_capacity(statements.len());

        for stmt in statements {
            match types.entry(stmt.name.as_str()) {
                Entry::Occupied(entry) => {
                    let first = *entry.get();
                    return Err(Error::duplicate_type(
                        &stmt.name,
                        first.span.statement,
                        stmt.span.statement,
                    ));
                }
                Entry::Vacant(entry) => {
                    entry.insert(stmt);
                }
            }
        }

        tracing::debug!(types = types.len(), "registered table-types");

        Ok(TypeRegistry { types })
    }

    pub fn resolve(&self, name: &str) -> Option<&'a TableStatement> {
        self.types.get(name).copied()
    }

    /// Declaration order of a table-type.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.types.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.types.keys().copied()
    }
}
