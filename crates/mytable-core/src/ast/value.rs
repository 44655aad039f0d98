use super::*;

use crate::schema::{Literal, ReferentialAction, SortOrder};

impl Parse for Literal {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        if let Some(lit) = p.peek::<Lit>() {
            p.next_token();
            return Ok(match lit {
                Lit::Str(lit) => Literal::String(lit.value),
                Lit::Number(lit) => Literal::Number(lit.value),
            });
        }

        if p.is_next::<kw::Null>() {
            p.next_token();
            return Ok(Literal::Null);
        }

        if p.is_next::<kw::True>() {
            p.next_token();
            return Ok(Literal::Bool(true));
        }

        if p.is_next::<kw::False>() {
            p.next_token();
            return Ok(Literal::Bool(false));
        }

        if !p.is_next::<Ident>() {
            return Err(p.unexpected("a value"));
        }

        // Bare keyword, optionally called: `CURRENT_TIMESTAMP(3)`
        let mut expr = p.parse::<Ident>()?.into_string();

        if p.is_next::<LParen>() {
            let args = p.parse::<Parenthesized<Lit>>()?;

            expr.push('(');
            let mut sep = "";
            for arg in args.iter() {
                expr.push_str(sep);
                expr.push_str(&arg.to_string());
                sep = ", ";
            }
            expr.push(')');
        }

        Ok(Literal::Expr(expr))
    }
}

impl Parse for ReferentialAction {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        if p.is_next::<kw::Restrict>() {
            p.next_token();
            Ok(ReferentialAction::Restrict)
        } else if p.is_next::<kw::Cascade>() {
            p.next_token();
            Ok(ReferentialAction::Cascade)
        } else if p.is_next::<kw::Set>() {
            p.next_token();

            if p.is_next::<kw::Null>() {
                p.next_token();
                Ok(ReferentialAction::SetNull)
            } else {
                p.parse::<kw::Default>()?;
                Ok(ReferentialAction::SetDefault)
            }
        } else if p.is_next::<kw::No>() {
            p.next_token();
            p.parse::<kw::Action>()?;
            Ok(ReferentialAction::NoAction)
        } else {
            Err(p.unexpected("a referential action"))
        }
    }
}

impl Parse for SortOrder {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match p.peek::<SortOrder>() {
            Some(order) => {
                p.next_token();
                Ok(order)
            }
            None => Err(p.unexpected("`ASC` or `DESC`")),
        }
    }
}

impl Peek for SortOrder {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        if kw::Asc::is_next(token) {
            Some(SortOrder::Asc)
        } else if kw::Desc::is_next(token) {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }
}
