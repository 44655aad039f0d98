use mytable_core::schema::TableStatement;

use indexmap::IndexMap;
use std::cmp::Reverse;

/// Sorts tables by how many tables reference them, directly or through
/// other tables, most referenced first. The sort is stable.
pub(crate) fn by_dependency(tables: &[TableStatement]) -> Vec<&TableStatement> {
    let index: IndexMap<&str, usize> = tables
        .iter()
        .enumerate()
        .map(|(i, table)| (table.name.as_str(), i))
        .collect();

    // Table -> tables it references
    let edges: Vec<Vec<usize>> = tables
        .iter()
        .map(|table| {
            table
                .references()
                .filter_map(|name| index.get(name).copied())
                .collect()
        })
        .collect();

    let mut dependents = vec![0usize; tables.len()];

    for start in 0..tables.len() {
        let mut seen = vec![false; tables.len()];
        seen[start] = true;

        let mut stack = edges[start].clone();
        while let Some(next) = stack.pop() {
            if seen[next] {
                continue;
            }

            seen[next] = true;
            dependents[next] += 1;
            stack.extend(&edges[next]);
        }
    }

    let mut order: Vec<usize> = (0..tables.len()).collect();
    order.sort_by_key(|&i| Reverse(dependents[i]));

    tracing::trace!(?dependents, "dependency order");

    order.into_iter().map(|i| &tables[i]).collect()
}
