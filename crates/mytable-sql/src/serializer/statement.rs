use super::{Formatter, Quoted, ToSql};

use crate::stmt::{self, Statement, TableOption};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if let Some(provenance) = &self.generated_from {
            let table = provenance.table.as_str();
            let field = provenance.field.as_str();

            fmt!(f, "-- Generated from template table '" table "', for " table "." field "\n");
        }

        let if_not_exists = if self.if_not_exists { "IF NOT EXISTS " } else { "" };
        fmt!(f, "CREATE TABLE " if_not_exists self.name " (");

        let mut s = "\n    ";
        for column in &self.columns {
            fmt!(f, s column);
            s = ",\n    ";
        }

        for constraint in &self.constraints {
            fmt!(f, s constraint);
            s = ",\n    ";
        }

        fmt!(f, "\n)");

        for option in &self.options {
            fmt!(f, " " option);
        }
    }
}

impl ToSql for &TableOption {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            TableOption::Engine(engine) => fmt!(f, "ENGINE = " engine.as_str()),
            TableOption::Charset(charset) => fmt!(f, "DEFAULT CHARSET = " charset.as_str()),
            TableOption::Collate(collation) => fmt!(f, "COLLATE = " collation.as_str()),
            TableOption::Other(key, value) => fmt!(f, key.as_str() " = " value),
            TableOption::Comment(comment) => fmt!(f, "COMMENT = " Quoted(comment)),
        }
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        let cascade = if self.cascade { " CASCADE" } else { "" };
        fmt!(f, "DROP TABLE " if_exists self.name cascade);
    }
}
