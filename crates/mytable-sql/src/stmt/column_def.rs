use super::{Literal, Name, Type};

use mytable_core::schema;

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: Name,
    pub ty: Type,
    pub charset: Option<String>,
    pub collation: Option<String>,
    pub not_null: bool,
    pub default: Option<Literal>,
    pub on_update: Option<Literal>,
    pub auto_increment: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub comment: Option<String>,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &schema::ColumnDef) -> ColumnDef {
        ColumnDef {
            name: Name::from(&column.name),
            ty: Type::from_schema(&column.ty),
            charset: column.charset.clone(),
            collation: column.collation.clone(),
            not_null: !column.nullable,
            default: column.default.clone(),
            on_update: column.on_update.clone(),
            auto_increment: column.modifiers.auto_increment,
            unique: column.modifiers.unique,
            primary_key: column.modifiers.primary_key,
            comment: column.comment.clone(),
        }
    }
}
