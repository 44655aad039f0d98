use super::{Formatter, ToSql};

use crate::stmt;

/// A back-quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('`');

        for ch in self.0.as_ref().chars() {
            if ch == '`' {
                f.dst.push('`');
            }
            f.dst.push(ch);
        }

        f.dst.push('`');
    }
}

impl ToSql for &stmt::Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.0));
    }
}
