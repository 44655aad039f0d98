use super::*;

use indexmap::IndexMap;
use std::collections::HashMap;

/// State accumulated across one rewrite pass.
pub(super) struct Context<'a> {
    pub(super) registry: &'a TypeRegistry<'a>,

    /// Names of synthesized tables, with the statement that produced them
    claimed: HashMap<String, usize>,

    /// Link tables produced by the statement being rewritten
    links: Vec<TableStatement>,

    /// Association tables keyed by their sorted pair of table names
    pub(super) associations: IndexMap<(String, String), Association>,
}

impl<'a> Context<'a> {
    pub(super) fn new(registry: &'a TypeRegistry<'a>) -> Context<'a> {
        Context {
            registry,
            claimed: HashMap::new(),
            links: vec![],
            associations: IndexMap::new(),
        }
    }

    /// Reserves a name for a synthesized table.
    ///
    /// Returns the statement that already holds the name, declared or
    /// synthesized, on collision.
    pub(super) fn claim(&mut self, name: &str, statement: usize) -> std::result::Result<(), usize> {
        if let Some(existing) = self.registry.resolve(name) {
            return Err(existing.span.statement);
        }

        if let Some(existing) = self.claimed.get(name) {
            return Err(*existing);
        }

        self.claimed.insert(name.to_string(), statement);
        Ok(())
    }

    pub(super) fn push_link(&mut self, table: TableStatement) {
        self.links.push(table);
    }

    pub(super) fn take_links(&mut self) -> Vec<TableStatement> {
        std::mem::take(&mut self.links)
    }
}
