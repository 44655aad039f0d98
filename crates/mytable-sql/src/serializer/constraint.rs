use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{KeyPart, TableConstraint};

impl ToSql for &TableConstraint {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            TableConstraint::PrimaryKey { columns } => {
                fmt!(f, "PRIMARY KEY (" Comma(columns) ")");
            }
            TableConstraint::UniqueKey { name, columns } => {
                let name = name.as_deref().map(|name| (Ident(name), " "));
                fmt!(f, "UNIQUE KEY " name "(" Comma(columns) ")");
            }
            TableConstraint::ForeignKey(fk) => {
                let name = fk.name.as_deref().map(|name| ("CONSTRAINT ", Ident(name), " "));
                let columns = Comma(fk.columns.iter().map(Ident));
                let ref_columns = Comma(fk.ref_columns.iter().map(Ident));
                let on_delete = fk.on_delete.map(|action| (" ON DELETE ", action));
                let on_update = fk.on_update.map(|action| (" ON UPDATE ", action));

                fmt!(
                    f, name "FOREIGN KEY (" columns ") REFERENCES " Ident(&fk.ref_table)
                    " (" ref_columns ")" on_delete on_update
                );
            }
            TableConstraint::Index { name, columns } => {
                let name = name.as_deref().map(|name| (Ident(name), " "));
                fmt!(f, "INDEX " name "(" Comma(columns) ")");
            }
        }
    }
}

impl ToSql for &KeyPart {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let length = self.length.map(|length| length.to_string());
        let length = length.as_deref().map(|length| ("(", length, ")"));
        let order = self.order.map(|order| (" ", order));

        fmt!(f, Ident(&self.column) length order);
    }
}
