#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod constraint;
mod statement;
mod ty;
mod value;
use value::Quoted;

use crate::{stmt::Statement, EmitConfig};

/// Serialize a statement to MySQL DDL text
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Emitter settings the output depends on
    config: &'a EmitConfig,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(config: &'a EmitConfig) -> Serializer<'a> {
        Serializer { config }
    }

    /// Serializes one statement, terminated by `;`.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Serializes a script: one blank line between statements and a
    /// trailing newline.
    pub fn serialize_all<'s>(&self, stmts: impl IntoIterator<Item = &'s Statement>) -> String {
        let mut ret = String::new();

        for stmt in stmts {
            if !ret.is_empty() {
                ret.push('\n');
            }

            ret.push_str(&self.serialize(stmt));
            ret.push('\n');
        }

        ret
    }
}
