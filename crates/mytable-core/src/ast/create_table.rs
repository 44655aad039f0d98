use super::*;

use crate::schema::{ReferentialAction, SortOrder};

#[derive(Debug)]
pub(crate) struct CreateTable {
    /// Position of the `CREATE` keyword
    pub pos: Pos,

    pub if_not_exists: bool,

    pub name: Ident,

    pub elements: Vec<TableElement>,

    pub options: Vec<TableOption>,
}

/// One comma separated entry between a table's parentheses.
#[derive(Debug)]
pub(crate) enum TableElement {
    Column(Column),
    PrimaryKey(KeyDef),
    Unique(KeyDef),
    ForeignKey(ForeignKeyDef),
    Index(KeyDef),
    CommonCode(CommonCode),
}

#[derive(Debug)]
pub(crate) struct KeyDef {
    pub pos: Pos,
    pub name: Option<Ident>,
    pub parts: Vec<KeyPartSyntax>,
}

#[derive(Debug)]
pub(crate) struct KeyPartSyntax {
    pub pos: Pos,
    pub column: Ident,
    pub length: Option<LitNumber>,
    pub order: Option<SortOrder>,
}

#[derive(Debug)]
pub(crate) struct ForeignKeyDef {
    pub pos: Pos,
    pub name: Option<Ident>,
    pub columns: Vec<Ident>,
    pub ref_table: Ident,
    pub ref_columns: Vec<Ident>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

/// `__common_code (column)`
#[derive(Debug)]
pub(crate) struct CommonCode {
    pub pos: Pos,
    pub column: Ident,
}

impl Parse for CreateTable {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let pos = p.pos();

        p.parse::<kw::Create>()?;
        p.parse::<Option<kw::Temporary>>()?;
        p.parse::<kw::Table>()?;

        let if_not_exists = if p.is_next::<kw::If>() {
            p.parse::<kw::If>()?;
            p.parse::<kw::Not>()?;
            p.parse::<kw::Exists>()?;
            true
        } else {
            false
        };

        // A `schema.table` qualifier is dropped
        let mut name = p.parse::<Ident>()?;
        while p.is_next::<Period>() {
            p.parse::<Period>()?;
            name = p.parse()?;
        }

        let elements = p
            .parse::<Parenthesized<TableElement>>()?
            .into_vec();

        let options = p.parse_repeated_until::<TableOption, End>()?;
        p.parse::<End>()?;

        Ok(CreateTable {
            pos,
            if_not_exists,
            name,
            elements,
            options,
        })
    }
}

impl Parse for TableElement {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let pos = p.pos();

        let constraint = p.parse::<Option<kw::Constraint>>()?.is_some();
        let symbol = if constraint
            && !(p.is_next::<kw::Primary>() || p.is_next::<kw::Unique>() || p.is_next::<kw::Foreign>())
        {
            Some(p.parse::<Ident>()?)
        } else {
            None
        };

        if p.is_next::<kw::Primary>() {
            p.parse::<kw::Primary>()?;
            p.parse::<kw::Key>()?;

            let parts = p.parse::<Parenthesized<KeyPartSyntax>>()?.into_vec();
            return Ok(TableElement::PrimaryKey(KeyDef {
                pos,
                name: symbol,
                parts,
            }));
        }

        if p.is_next::<kw::Unique>() {
            p.parse::<kw::Unique>()?;
            if p.is_next::<kw::Key>() {
                p.parse::<kw::Key>()?;
            } else if p.is_next::<kw::Index>() {
                p.parse::<kw::Index>()?;
            }

            let name = parse_index_name(p)?;
            let parts = p.parse::<Parenthesized<KeyPartSyntax>>()?.into_vec();
            return Ok(TableElement::Unique(KeyDef {
                pos,
                name: symbol.or(name),
                parts,
            }));
        }

        if p.is_next::<kw::Foreign>() {
            return ForeignKeyDef::parse_with(p, pos, symbol).map(TableElement::ForeignKey);
        }

        if constraint {
            return Err(p.unexpected("`PRIMARY`, `UNIQUE` or `FOREIGN`"));
        }

        if p.is_next::<kw::Index>() || p.is_next::<kw::Key>() {
            p.next_token();

            let name = parse_index_name(p)?;
            let parts = p.parse::<Parenthesized<KeyPartSyntax>>()?.into_vec();
            return Ok(TableElement::Index(KeyDef { pos, name, parts }));
        }

        if p.is_next::<kw::DirCommonCode>() {
            p.extension("`__common_code`")?;
            p.parse::<kw::DirCommonCode>()?;

            let columns = p.parse::<Parenthesized<Ident>>()?.into_vec();
            let Ok([column]) = <[Ident; 1]>::try_from(columns) else {
                return Err(p.error_at(pos, "`__common_code` takes exactly one column"));
            };

            return Ok(TableElement::CommonCode(CommonCode { pos, column }));
        }

        p.parse().map(TableElement::Column)
    }
}

impl ForeignKeyDef {
    fn parse_with(p: &mut Parser<'_>, pos: Pos, symbol: Option<Ident>) -> Result<Self> {
        p.parse::<kw::Foreign>()?;
        p.parse::<kw::Key>()?;

        let name = parse_index_name(p)?;
        let columns = p.parse::<Parenthesized<Ident>>()?.into_vec();

        p.parse::<kw::References>()?;
        let ref_table = p.parse::<Ident>()?;
        let ref_columns = p.parse::<Parenthesized<Ident>>()?.into_vec();

        if columns.len() != ref_columns.len() {
            return Err(p.error_at(
                pos,
                format!(
                    "foreign key has {} columns but references {}",
                    columns.len(),
                    ref_columns.len()
                ),
            ));
        }

        let mut on_delete = None;
        let mut on_update = None;

        while p.is_next::<kw::On>() {
            p.parse::<kw::On>()?;

            if p.is_next::<kw::Delete>() {
                p.parse::<kw::Delete>()?;
                on_delete = Some(p.parse()?);
            } else if p.is_next::<kw::Update>() {
                p.parse::<kw::Update>()?;
                on_update = Some(p.parse()?);
            } else {
                return Err(p.unexpected("`DELETE` or `UPDATE`"));
            }
        }

        Ok(ForeignKeyDef {
            pos,
            name: symbol.or(name),
            columns,
            ref_table,
            ref_columns,
            on_delete,
            on_update,
        })
    }
}

impl Parse for KeyPartSyntax {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let pos = p.pos();
        let column = p.parse()?;

        let length = if p.is_next::<LParen>() {
            p.parse::<LParen>()?;
            let length = p.parse()?;
            p.parse::<RParen>()?;
            Some(length)
        } else {
            None
        };

        let order = p.parse()?;

        Ok(KeyPartSyntax {
            pos,
            column,
            length,
            order,
        })
    }
}

/// Optional index name ahead of the column list.
fn parse_index_name(p: &mut Parser<'_>) -> Result<Option<Ident>> {
    if p.is_next::<LParen>() {
        Ok(None)
    } else {
        p.parse().map(Some)
    }
}
