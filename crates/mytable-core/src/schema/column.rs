use super::{Literal, TypeRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,

    pub ty: TypeRef,

    pub nullable: bool,

    pub default: Option<Literal>,

    /// `ON UPDATE` value
    pub on_update: Option<Literal>,

    pub comment: Option<String>,

    pub charset: Option<String>,

    pub collation: Option<String>,

    pub modifiers: Modifiers,
}

/// Flags and attributes attached to a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Many-to-many association with another table's business key
    pub assoc: Option<Assoc>,

    /// Value is promoted out of a semi-structured sibling column
    pub lift: bool,

    pub unique: bool,

    /// Declared `PRIMARY KEY` inline
    pub primary_key: bool,

    pub auto_increment: bool,
}

/// Target of an `__assoc Table.column` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assoc {
    pub table: String,
    pub column: String,
}

impl ColumnDef {
    /// A nullable column with no attributes.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty,
            nullable: true,
            default: None,
            on_update: None,
            comment: None,
            charset: None,
            collation: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.modifiers.auto_increment = true;
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Same column with another type. Attributes that only apply to the
    /// old type are dropped.
    pub fn retyped(&self, ty: TypeRef) -> ColumnDef {
        let keep_charset = ty.as_scalar().is_some_and(|scalar| scalar.is_string());

        ColumnDef {
            ty,
            charset: self.charset.clone().filter(|_| keep_charset),
            collation: self.collation.clone().filter(|_| keep_charset),
            modifiers: Modifiers {
                assoc: None,
                ..self.modifiers.clone()
            },
            ..self.clone()
        }
    }
}
