pub mod config;
pub use config::{EmitConfig, JsonType, Order};

mod order;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;

use mytable_core::schema::TableStatement;
use stmt::{CreateTable, DropTable};

/// Renders rewritten tables as a MySQL DDL script.
///
/// Statements are separated by a blank line and the script ends with a
/// newline. No tables render as an empty string.
pub fn emit(tables: &[TableStatement], config: &EmitConfig) -> String {
    let tables = match config.order {
        Order::Declaration => tables.iter().collect(),
        Order::Dependency => order::by_dependency(tables),
    };

    let mut stmts: Vec<Statement> = vec![];

    if config.drop_tables {
        stmts.extend(tables.iter().rev().map(|table| -> Statement {
            DropTable::new(table)
                .if_exists()
                .cascade(config.drop_cascade)
                .into()
        }));
    }

    for table in &tables {
        let mut create_table = CreateTable::from_schema(table);
        create_table.if_not_exists |= config.if_not_exists;
        stmts.push(create_table.into());
    }

    let ret = Serializer::new(config).serialize_all(&stmts);

    tracing::debug!(
        tables = tables.len(),
        statements = stmts.len(),
        order = ?config.order,
        "emitted script"
    );

    ret
}
