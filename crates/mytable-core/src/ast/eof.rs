use super::*;

/// The end of a statement: a `;` or the end of input.
#[derive(Debug)]
pub(crate) struct End;

impl Parse for End {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        if p.is_eof() {
            Ok(End)
        } else if p.is_next::<SemiColon>() {
            p.next_token();
            Ok(End)
        } else {
            Err(p.unexpected("`;`"))
        }
    }
}

impl Peek for End {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            None | Some(Token::Punct(Punct::SemiColon(_))) => Some(End),
            _ => None,
        }
    }
}
