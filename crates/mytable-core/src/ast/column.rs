use super::*;

use crate::schema::Literal;

#[derive(Debug)]
pub(crate) struct Column {
    pub pos: Pos,
    pub name: Ident,
    pub ty: Type,
    pub attrs: Vec<ColumnAttr>,
}

#[derive(Debug)]
pub(crate) enum ColumnAttr {
    /// `NULL` when true, `NOT NULL` when false
    Nullable(bool),
    Default(Literal),
    OnUpdate(Literal),
    AutoIncrement,
    Unique,
    PrimaryKey,
    Comment(String),
    Charset(String),
    Collate(String),

    /// `__assoc Table.column`
    Assoc {
        pos: Pos,
        table: Ident,
        column: Ident,
    },

    /// `__lift`
    Lift(Pos),
}

/// Peeks the end of a column definition.
struct ColumnEnd;

impl Parse for Column {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let pos = p.pos();
        let name = p.parse()?;
        let ty = p.parse()?;
        let attrs = p.parse_repeated_until::<ColumnAttr, ColumnEnd>()?;

        Ok(Column {
            pos,
            name,
            ty,
            attrs,
        })
    }
}

impl Parse for ColumnAttr {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let pos = p.pos();

        if p.is_next::<kw::Not>() {
            p.parse::<kw::Not>()?;
            p.parse::<kw::Null>()?;
            Ok(ColumnAttr::Nullable(false))
        } else if p.is_next::<kw::Null>() {
            p.parse::<kw::Null>()?;
            Ok(ColumnAttr::Nullable(true))
        } else if p.is_next::<kw::Default>() {
            p.parse::<kw::Default>()?;
            p.parse().map(ColumnAttr::Default)
        } else if p.is_next::<kw::On>() {
            p.parse::<kw::On>()?;
            p.parse::<kw::Update>()?;
            p.parse().map(ColumnAttr::OnUpdate)
        } else if p.is_next::<kw::AutoIncrement>() {
            p.parse::<kw::AutoIncrement>()?;
            Ok(ColumnAttr::AutoIncrement)
        } else if p.is_next::<kw::Unique>() {
            p.parse::<kw::Unique>()?;
            p.parse::<Option<kw::Key>>()?;
            Ok(ColumnAttr::Unique)
        } else if p.is_next::<kw::Primary>() {
            p.parse::<kw::Primary>()?;
            p.parse::<kw::Key>()?;
            Ok(ColumnAttr::PrimaryKey)
        } else if p.is_next::<kw::Key>() {
            // A bare `KEY` in a column definition means `PRIMARY KEY`
            p.parse::<kw::Key>()?;
            Ok(ColumnAttr::PrimaryKey)
        } else if p.is_next::<kw::Comment>() {
            p.parse::<kw::Comment>()?;
            Ok(ColumnAttr::Comment(p.parse::<LitStr>()?.value))
        } else if p.is_next::<kw::Character>() {
            p.parse::<kw::Character>()?;
            p.parse::<kw::Set>()?;
            parse_name(p).map(ColumnAttr::Charset)
        } else if p.is_next::<kw::Charset>() {
            p.parse::<kw::Charset>()?;
            parse_name(p).map(ColumnAttr::Charset)
        } else if p.is_next::<kw::Collate>() {
            p.parse::<kw::Collate>()?;
            parse_name(p).map(ColumnAttr::Collate)
        } else if p.is_next::<kw::DirAssoc>() {
            p.extension("`__assoc`")?;
            p.parse::<kw::DirAssoc>()?;

            let table = p.parse()?;
            p.parse::<Period>()?;
            let column = p.parse()?;

            Ok(ColumnAttr::Assoc { pos, table, column })
        } else if p.is_next::<kw::DirLift>() {
            p.extension("`__lift`")?;
            p.parse::<kw::DirLift>()?;
            Ok(ColumnAttr::Lift(pos))
        } else {
            Err(p.unexpected("a column attribute, `,` or `)`"))
        }
    }
}

impl Parse for ColumnEnd {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        Err(p.unexpected("`,` or `)`"))
    }
}

impl Peek for ColumnEnd {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Punct(Punct::Comma(_) | Punct::RParen(_))) => Some(ColumnEnd),
            _ => None,
        }
    }
}

/// A charset or collation name, bare or quoted.
pub(super) fn parse_name(p: &mut Parser<'_>) -> Result<String> {
    if let Some(lit) = p.parse::<Option<LitStr>>()? {
        Ok(lit.value)
    } else {
        Ok(p.parse::<Ident>()?.into_string())
    }
}
