use super::*;

use crate::{ast, Diagnostic, Error};

use std::collections::HashSet;

/// MySQL's limit on table and column names
const MAX_IDENT_LEN: usize = 64;

/// Lowers parsed statements into `TableStatement`s, enforcing the rules the
/// grammar alone cannot express.
pub(crate) struct Builder {
    /// Dialect extensions are accepted
    extensions: bool,

    /// Every table must declare a primary key
    require_primary_key: bool,
}

/// Lowering state for a single statement
struct TableBuilder<'a> {
    builder: &'a Builder,
    statement: usize,
}

type Lowered<T> = Result<T, Diagnostic>;

impl Builder {
    pub(crate) fn new(extensions: bool, require_primary_key: bool) -> Builder {
        Builder {
            extensions,
            require_primary_key,
        }
    }

    pub(crate) fn from_ast(&self, script: ast::Script) -> crate::Result<Vec<TableStatement>> {
        let mut diagnostics = script.diagnostics;
        let mut tables = vec![];

        for (statement, create_table) in script.statements {
            let table = TableBuilder {
                builder: self,
                statement,
            };

            match table.lower(create_table) {
                Ok(table) => tables.push(table),
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }

        if !diagnostics.is_empty() {
            diagnostics.sort_by_key(|d| (d.statement, d.line, d.column));

            for diagnostic in &diagnostics {
                tracing::warn!(%diagnostic, "malformed statement");
            }

            return Err(Error::syntax(diagnostics));
        }

        Ok(tables)
    }
}

impl TableBuilder<'_> {
    fn lower(&self, create_table: ast::CreateTable) -> Lowered<TableStatement> {
        let ast::CreateTable {
            pos,
            if_not_exists,
            name,
            elements,
            options,
        } = create_table;

        self.check_ident_len(pos, "table", name.as_str())?;

        let mut table = TableStatement::new(name.into_string());
        table.if_not_exists = if_not_exists;
        table.span = Span {
            statement: self.statement,
            line: pos.line,
        };

        // Columns with their explicit nullability, resolved once the primary
        // key is known.
        let mut columns: Vec<(ColumnDef, Option<bool>)> = vec![];
        let mut names = HashSet::new();
        let mut key_refs: Vec<(ast::Pos, String)> = vec![];
        let mut table_pks = 0;

        for element in elements {
            match element {
                ast::TableElement::Column(column) => {
                    let pos = column.pos;
                    self.check_ident_len(pos, "column", column.name.as_str())?;

                    if !names.insert(column.name.as_str().to_string()) {
                        return Err(self.error(pos, format!("duplicate column `{}`", column.name)));
                    }

                    columns.push(self.lower_column(column)?);
                }
                ast::TableElement::PrimaryKey(key) => {
                    table_pks += 1;
                    let parts = self.lower_key_parts(key.parts, &mut key_refs)?;
                    table
                        .constraints
                        .push(TableConstraint::PrimaryKey { columns: parts });
                }
                ast::TableElement::Unique(key) => {
                    let parts = self.lower_key_parts(key.parts, &mut key_refs)?;
                    table.constraints.push(TableConstraint::UniqueKey {
                        name: key.name.map(ast::Ident::into_string),
                        columns: parts,
                    });
                }
                ast::TableElement::Index(key) => {
                    let parts = self.lower_key_parts(key.parts, &mut key_refs)?;
                    table.constraints.push(TableConstraint::Index {
                        name: key.name.map(ast::Ident::into_string),
                        columns: parts,
                    });
                }
                ast::TableElement::ForeignKey(fk) => {
                    for column in &fk.columns {
                        key_refs.push((fk.pos, column.as_str().to_string()));
                    }

                    table
                        .constraints
                        .push(TableConstraint::ForeignKey(ForeignKey {
                            name: fk.name.map(ast::Ident::into_string),
                            columns: fk.columns.into_iter().map(ast::Ident::into_string).collect(),
                            ref_table: fk.ref_table.into_string(),
                            ref_columns: fk
                                .ref_columns
                                .into_iter()
                                .map(ast::Ident::into_string)
                                .collect(),
                            on_delete: fk.on_delete,
                            on_update: fk.on_update,
                        }));
                }
                ast::TableElement::CommonCode(common_code) => {
                    if table.common_code.is_some() {
                        return Err(self.error(common_code.pos, "duplicate `__common_code`"));
                    }

                    key_refs.push((common_code.pos, common_code.column.as_str().to_string()));
                    table.common_code = Some(common_code.column.into_string());
                }
            }
        }

        if columns.is_empty() {
            return Err(self.error(pos, format!("table `{}` has no columns", table.name)));
        }

        for (pos, column) in &key_refs {
            if !names.contains(column) {
                return Err(self.error(*pos, format!("unknown column `{column}`")));
            }
        }

        let inline_pks = columns
            .iter()
            .filter(|(column, _)| column.modifiers.primary_key)
            .count();

        if table_pks + usize::from(inline_pks > 0) > 1 || inline_pks > 1 {
            return Err(self.error(pos, format!("table `{}` has multiple primary keys", table.name)));
        }

        let (defs, explicit): (Vec<_>, Vec<_>) = columns.into_iter().unzip();
        table.columns = defs;

        let primary_key: HashSet<String> =
            table.primary_key().into_iter().map(str::to_string).collect();

        if primary_key.is_empty() && self.builder.require_primary_key {
            return Err(self.error(pos, format!("table `{}` has no primary key", table.name)));
        }

        // Key columns are implicitly NOT NULL
        for (column, explicit) in table.columns.iter_mut().zip(explicit) {
            column.nullable = explicit.unwrap_or(!primary_key.contains(&column.name));
        }

        table.options = lower_options(options);

        Ok(table)
    }

    fn lower_column(&self, column: ast::Column) -> Lowered<(ColumnDef, Option<bool>)> {
        let ty = self.lower_type(column.ty, false)?;
        let mut def = ColumnDef::new(column.name.into_string(), ty);
        let mut nullable = None;

        for attr in column.attrs {
            match attr {
                ast::ColumnAttr::Nullable(value) => nullable = Some(value),
                ast::ColumnAttr::Default(value) => def.default = Some(value),
                ast::ColumnAttr::OnUpdate(value) => def.on_update = Some(value),
                ast::ColumnAttr::AutoIncrement => def.modifiers.auto_increment = true,
                ast::ColumnAttr::Unique => def.modifiers.unique = true,
                ast::ColumnAttr::PrimaryKey => def.modifiers.primary_key = true,
                ast::ColumnAttr::Comment(comment) => def.comment = Some(comment),
                ast::ColumnAttr::Charset(charset) => def.charset = Some(charset),
                ast::ColumnAttr::Collate(collation) => def.collation = Some(collation),
                ast::ColumnAttr::Assoc { pos, table, column } => {
                    let is_string_list = def
                        .ty
                        .list_element()
                        .and_then(TypeRef::as_scalar)
                        .is_some_and(|element| element.is_primitive() && element.is_string());

                    if !is_string_list {
                        return Err(self.error(pos, "`__assoc` requires a `List<String>` column"));
                    }

                    if def.modifiers.assoc.is_some() {
                        return Err(self.error(pos, "duplicate `__assoc`"));
                    }

                    def.modifiers.assoc = Some(Assoc {
                        table: table.into_string(),
                        column: column.into_string(),
                    });
                }
                ast::ColumnAttr::Lift(pos) => {
                    if !def.ty.as_scalar().is_some_and(ScalarType::is_sql) {
                        return Err(self.error(pos, "`__lift` requires a scalar SQL column"));
                    }

                    def.modifiers.lift = true;
                }
            }
        }

        Ok((def, nullable))
    }

    fn lower_type(&self, ty: ast::Type, map_value: bool) -> Lowered<TypeRef> {
        Ok(match ty {
            ast::Type::List(inner) => TypeRef::list_of(self.lower_type(*inner, false)?),
            ast::Type::Map(key, value) => TypeRef::map_of(
                self.lower_type(*key, false)?,
                self.lower_type(*value, true)?,
            ),
            ast::Type::Opaque(pos) => {
                if !map_value {
                    return Err(self.error(pos, "`Object` is only valid as a map value"));
                }

                TypeRef::Opaque
            }
            ast::Type::Scalar(scalar) => {
                if !self.builder.extensions && !primitive::is_sql_type(scalar.name.as_str()) {
                    return Err(self.error(
                        scalar.pos,
                        format!("`{}` is not a standard SQL type", scalar.name),
                    ));
                }

                TypeRef::Scalar(ScalarType {
                    name: scalar.name.into_string(),
                    params: scalar.params,
                    unsigned: scalar.unsigned,
                    zerofill: scalar.zerofill,
                })
            }
        })
    }

    fn lower_key_parts(
        &self,
        parts: Vec<ast::KeyPartSyntax>,
        key_refs: &mut Vec<(ast::Pos, String)>,
    ) -> Lowered<Vec<KeyPart>> {
        parts
            .into_iter()
            .map(|part| {
                let length = match part.length {
                    Some(length) => Some(
                        length
                            .as_u32()
                            .ok_or_else(|| self.error(part.pos, "invalid key prefix length"))?,
                    ),
                    None => None,
                };

                key_refs.push((part.pos, part.column.as_str().to_string()));

                Ok(KeyPart {
                    column: part.column.into_string(),
                    length,
                    order: part.order,
                })
            })
            .collect()
    }

    fn check_ident_len(&self, pos: ast::Pos, what: &str, name: &str) -> Lowered<()> {
        if name.chars().count() > MAX_IDENT_LEN {
            Err(self.error(
                pos,
                format!("{what} name `{name}` exceeds {MAX_IDENT_LEN} characters"),
            ))
        } else {
            Ok(())
        }
    }

    fn error(&self, pos: ast::Pos, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(self.statement, pos.line, pos.column, message)
    }
}

fn lower_options(options: Vec<ast::TableOption>) -> TableOptions {
    let mut ret = TableOptions::default();

    for option in options {
        match option {
            ast::TableOption::Engine(engine) => ret.engine = Some(engine),
            ast::TableOption::Charset(charset) => ret.charset = Some(charset),
            ast::TableOption::Collate(collation) => ret.collation = Some(collation),
            ast::TableOption::Comment(comment) => ret.comment = Some(comment),
            ast::TableOption::Other(key, value) => ret.extra.push((key.into_string(), value)),
        }
    }

    ret
}
