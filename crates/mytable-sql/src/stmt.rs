mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::{CreateTable, TableOption};

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

mod ty;
pub use ty::Type;

pub use mytable_core::schema::{
    ForeignKey, KeyPart, Literal, Provenance, ReferentialAction, SortOrder, TableConstraint,
};

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
}

impl Statement {
    /// Name of the table the statement acts on.
    pub fn name(&self) -> &Name {
        match self {
            Statement::CreateTable(stmt) => &stmt.name,
            Statement::DropTable(stmt) => &stmt.name,
        }
    }
}
