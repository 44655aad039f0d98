use super::{Formatter, Quoted, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let charset = self.charset.as_deref().map(|charset| (" CHARACTER SET ", charset));
        let collation = self.collation.as_deref().map(|collation| (" COLLATE ", collation));
        let not_null = if self.not_null { " NOT NULL" } else { " NULL" };
        let default = self.default.as_ref().map(|value| (" DEFAULT ", value));
        let on_update = self.on_update.as_ref().map(|value| (" ON UPDATE ", value));
        let auto_increment = if self.auto_increment { " AUTO_INCREMENT" } else { "" };
        let unique = if self.unique { " UNIQUE" } else { "" };
        let primary_key = if self.primary_key { " PRIMARY KEY" } else { "" };
        let comment = self.comment.as_deref().map(|comment| (" COMMENT ", Quoted(comment)));

        fmt!(
            f, self.name " " self.ty charset collation not_null default on_update
            auto_increment unique primary_key comment
        );
    }
}
