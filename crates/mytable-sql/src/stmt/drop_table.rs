use super::*;

use mytable_core::schema::TableStatement;

/// `DROP TABLE [IF EXISTS] name [CASCADE]`
#[derive(Debug, Clone)]
pub struct DropTable {
    pub name: Name,
    pub if_exists: bool,
    pub cascade: bool,
}

impl DropTable {
    pub fn new(table: &TableStatement) -> DropTable {
        DropTable {
            name: Name::from(&table.name),
            if_exists: false,
            cascade: false,
        }
    }

    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    pub fn cascade(mut self, cascade: bool) -> Self {
        self.cascade = cascade;
        self
    }
}

impl Statement {
    pub fn drop_table(table: &TableStatement) -> Self {
        DropTable::new(table).into()
    }

    /// Same as [`Statement::drop_table`], tolerating an absent table.
    pub fn drop_table_if_exists(table: &TableStatement) -> Self {
        DropTable::new(table).if_exists().into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
