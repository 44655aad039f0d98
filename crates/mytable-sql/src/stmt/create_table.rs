use super::*;

use mytable_core::schema::TableStatement;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    pub if_not_exists: bool,

    /// Set when the table was synthesized; rendered as a leading comment
    pub generated_from: Option<Provenance>,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key, unique keys, foreign keys, then indexes
    pub constraints: Vec<TableConstraint>,

    /// Options following the closing parenthesis, in rendering order
    pub options: Vec<TableOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOption {
    Engine(String),
    Charset(String),
    Collate(String),
    Other(String, Literal),
    Comment(String),
}

impl CreateTable {
    pub fn from_schema(table: &TableStatement) -> CreateTable {
        let mut constraints = table.constraints.clone();
        constraints.sort_by_key(TableConstraint::rank);

        if let Some(common_code) = &table.common_code {
            if !is_indexed(table, common_code) {
                constraints.push(TableConstraint::Index {
                    name: None,
                    columns: vec![KeyPart::new(common_code.clone())],
                });
            }
        }

        let options = &table.options;
        let options = options
            .engine
            .iter()
            .map(|engine| TableOption::Engine(engine.clone()))
            .chain(options.charset.iter().map(|c| TableOption::Charset(c.clone())))
            .chain(options.collation.iter().map(|c| TableOption::Collate(c.clone())))
            .chain(
                options
                    .extra
                    .iter()
                    .map(|(key, value)| TableOption::Other(key.clone(), value.clone())),
            )
            .chain(options.comment.iter().map(|c| TableOption::Comment(c.clone())))
            .collect();

        CreateTable {
            name: Name::from(&table.name),
            if_not_exists: table.if_not_exists,
            generated_from: table.provenance.clone(),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
            constraints,
            options,
        }
    }
}

impl Statement {
    pub fn create_table(table: &TableStatement) -> Self {
        CreateTable::from_schema(table).into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}

/// True when `column` leads a key or index, or is a key on its own.
fn is_indexed(table: &TableStatement, column: &str) -> bool {
    let by_constraint = table.constraints.iter().any(|constraint| {
        !matches!(constraint, TableConstraint::ForeignKey(_))
            && constraint.columns().first() == Some(&column)
    });

    let by_column = table.column(column).is_some_and(|def| {
        def.modifiers.unique || def.modifiers.primary_key
    });

    by_constraint || by_column
}
