use super::{Formatter, ToSql};

use crate::stmt::{Literal, ReferentialAction, SortOrder};

/// A single-quoted string literal.
pub(super) struct Quoted<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Quoted<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &Literal::string(self.0.as_ref()));
    }
}

impl ToSql for &Literal {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}

impl ToSql for ReferentialAction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self.as_str());
    }
}

impl ToSql for SortOrder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        });
    }
}
