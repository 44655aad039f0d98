#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    PrimaryKey {
        columns: Vec<KeyPart>,
    },
    UniqueKey {
        name: Option<String>,
        columns: Vec<KeyPart>,
    },
    ForeignKey(ForeignKey),
    Index {
        name: Option<String>,
        columns: Vec<KeyPart>,
    },
}

/// A column inside a key or index definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPart {
    pub column: String,

    /// Prefix length
    pub length: Option<u32>,

    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

impl TableConstraint {
    /// Rendering rank: primary key, unique keys, foreign keys, indexes.
    pub fn rank(&self) -> u8 {
        match self {
            TableConstraint::PrimaryKey { .. } => 0,
            TableConstraint::UniqueKey { .. } => 1,
            TableConstraint::ForeignKey(_) => 2,
            TableConstraint::Index { .. } => 3,
        }
    }

    /// Local columns the constraint covers, in order.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            TableConstraint::PrimaryKey { columns }
            | TableConstraint::UniqueKey { columns, .. }
            | TableConstraint::Index { columns, .. } => {
                columns.iter().map(|part| part.column.as_str()).collect()
            }
            TableConstraint::ForeignKey(fk) => fk.columns.iter().map(String::as_str).collect(),
        }
    }
}

impl KeyPart {
    pub fn new(column: impl Into<String>) -> KeyPart {
        KeyPart {
            column: column.into(),
            length: None,
            order: None,
        }
    }
}

impl ReferentialAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        }
    }
}
