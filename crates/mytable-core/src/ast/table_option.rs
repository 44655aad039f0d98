use super::*;

use crate::schema::Literal;

#[derive(Debug)]
pub(crate) enum TableOption {
    Engine(String),
    Charset(String),
    Collate(String),
    Comment(String),
    Other(Ident, Literal),
}

impl Parse for TableOption {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.parse::<Option<kw::Default>>()?;

        let option = if p.is_next::<kw::Engine>() {
            p.parse::<kw::Engine>()?;
            p.parse::<Option<Eq>>()?;
            TableOption::Engine(super::column::parse_name(p)?)
        } else if p.is_next::<kw::Charset>() {
            p.parse::<kw::Charset>()?;
            p.parse::<Option<Eq>>()?;
            TableOption::Charset(super::column::parse_name(p)?)
        } else if p.is_next::<kw::Character>() {
            p.parse::<kw::Character>()?;
            p.parse::<kw::Set>()?;
            p.parse::<Option<Eq>>()?;
            TableOption::Charset(super::column::parse_name(p)?)
        } else if p.is_next::<kw::Collate>() {
            p.parse::<kw::Collate>()?;
            p.parse::<Option<Eq>>()?;
            TableOption::Collate(super::column::parse_name(p)?)
        } else if p.is_next::<kw::Comment>() {
            p.parse::<kw::Comment>()?;
            p.parse::<Option<Eq>>()?;
            TableOption::Comment(p.parse::<LitStr>()?.value)
        } else if p.is_next::<Ident>() {
            let key = p.parse()?;
            p.parse::<Option<Eq>>()?;
            TableOption::Other(key, p.parse()?)
        } else {
            return Err(p.unexpected("a table option or `;`"));
        };

        p.parse::<Option<Comma>>()?;

        Ok(option)
    }
}
