use super::{ColumnDef, TableConstraint, TableOptions};

/// One declared, or synthesized, table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStatement {
    pub name: String,

    /// `CREATE TABLE IF NOT EXISTS`
    pub if_not_exists: bool,

    pub columns: Vec<ColumnDef>,

    pub constraints: Vec<TableConstraint>,

    pub options: TableOptions,

    /// The externally visible business-key column
    pub common_code: Option<String>,

    /// Set on tables the rewriter synthesized
    pub provenance: Option<Provenance>,

    /// Where the statement was declared. Synthesized tables carry the span of
    /// the statement that triggered them.
    pub span: Span,
}

/// The table and field a synthesized table materializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub table: String,
    pub field: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    /// Zero-based statement index
    pub statement: usize,

    /// One-based line of the `CREATE` keyword
    pub line: usize,
}

impl TableStatement {
    pub fn new(name: impl Into<String>) -> TableStatement {
        TableStatement {
            name: name.into(),
            if_not_exists: false,
            columns: vec![],
            constraints: vec![],
            options: TableOptions::default(),
            common_code: None,
            provenance: None,
            span: Span::default(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Primary key columns, from a table-level constraint or inline
    /// `PRIMARY KEY` attributes.
    pub fn primary_key(&self) -> Vec<&str> {
        let table_level = self.constraints.iter().find_map(|constraint| match constraint {
            TableConstraint::PrimaryKey { columns } => {
                Some(columns.iter().map(|part| part.column.as_str()).collect())
            }
            _ => None,
        });

        table_level.unwrap_or_else(|| {
            self.columns
                .iter()
                .filter(|column| column.modifiers.primary_key)
                .map(|column| column.name.as_str())
                .collect()
        })
    }

    /// The column foreign keys point at: the single-column primary key, or
    /// failing that a column named `id`.
    pub fn id_column(&self) -> Option<&ColumnDef> {
        match self.primary_key()[..] {
            [pk] => self.column(pk),
            [] => self.column("id"),
            _ => None,
        }
    }

    /// Tables this table references through foreign keys.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.constraints.iter().filter_map(|constraint| match constraint {
            TableConstraint::ForeignKey(fk) => Some(fk.ref_table.as_str()),
            _ => None,
        })
    }

    pub fn is_synthesized(&self) -> bool {
        self.provenance.is_some()
    }
}
