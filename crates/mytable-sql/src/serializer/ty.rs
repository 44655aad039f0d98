use super::{Comma, Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.is_json() {
            let json_type = f.serializer.config.json_type.as_sql();
            fmt!(f, json_type);
            return;
        }

        let params = (!self.params.is_empty()).then(|| ("(", Comma(&self.params), ")"));
        let unsigned = if self.unsigned { " UNSIGNED" } else { "" };
        let zerofill = if self.zerofill { " ZEROFILL" } else { "" };

        fmt!(f, self.name.as_str() params unsigned zerofill);
    }
}
