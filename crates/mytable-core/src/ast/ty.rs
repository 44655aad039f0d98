use super::*;

use crate::schema::Literal;

#[derive(Debug)]
pub(crate) enum Type {
    /// `List<T>`
    List(Box<Type>),

    /// `Map<K, V>`
    Map(Box<Type>, Box<Type>),

    /// `Object` or `Any`
    Opaque(Pos),

    Scalar(ScalarSyntax),
}

#[derive(Debug)]
pub(crate) struct ScalarSyntax {
    pub pos: Pos,
    pub name: Ident,
    pub params: Vec<Literal>,
    pub unsigned: bool,
    pub zerofill: bool,
}

impl Parse for Type {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let pos = p.pos();

        if p.is_next::<kw::List>() && p.is_nth::<Lt>(1) {
            p.extension("`List<...>`")?;
            p.parse::<kw::List>()?;

            let args = p.parse::<AngleBracketed<Type>>()?.into_vec();
            let Ok([inner]) = <[Type; 1]>::try_from(args) else {
                return Err(p.error_at(pos, "`List` takes exactly one type argument"));
            };

            return Ok(Type::List(Box::new(inner)));
        }

        if p.is_next::<kw::Map>() && p.is_nth::<Lt>(1) {
            p.extension("`Map<...>`")?;
            p.parse::<kw::Map>()?;

            let args = p.parse::<AngleBracketed<Type>>()?.into_vec();
            let Ok([key, value]) = <[Type; 2]>::try_from(args) else {
                return Err(p.error_at(pos, "`Map` takes exactly two type arguments"));
            };

            return Ok(Type::Map(Box::new(key), Box::new(value)));
        }

        if p.extensions() && (p.is_next::<kw::Object>() || p.is_next::<kw::Any>()) {
            p.next_token();
            return Ok(Type::Opaque(pos));
        }

        p.parse().map(Type::Scalar)
    }
}

impl Parse for ScalarSyntax {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let pos = p.pos();

        if !p.is_next::<Ident>() {
            return Err(p.unexpected("a type"));
        }

        let name = p.parse::<Ident>()?;

        if name.is_keyword("DOUBLE") && p.is_next::<kw::Precision>() {
            p.parse::<kw::Precision>()?;
        }

        let params = if p.is_next::<LParen>() {
            p.parse::<Parenthesized<Lit>>()?
                .into_vec()
                .into_iter()
                .map(|lit| match lit {
                    Lit::Str(lit) => Literal::String(lit.value),
                    Lit::Number(lit) => Literal::Number(lit.value),
                })
                .collect()
        } else {
            vec![]
        };

        let mut unsigned = false;
        let mut zerofill = false;

        loop {
            if p.is_next::<kw::Unsigned>() {
                p.next_token();
                unsigned = true;
            } else if p.is_next::<kw::Signed>() {
                p.next_token();
            } else if p.is_next::<kw::Zerofill>() {
                p.next_token();
                zerofill = true;
            } else {
                break;
            }
        }

        Ok(ScalarSyntax {
            pos,
            name,
            params,
            unsigned,
            zerofill,
        })
    }
}
