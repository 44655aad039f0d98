use super::*;

use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum Token {
    Ident(Ident),
    Punct(Punct),
    Lit(Lit),

    /// Input the lexer could not tokenize, with a description.
    Invalid(String),
}

impl Parse for Token {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match p.next_token() {
            Some(token) => Ok(token),
            None => Err(p.unexpected("a token")),
        }
    }
}

impl Peek for Token {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        token.cloned()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(ident) => write!(f, "`{}`", ident.as_str().replace('`', "``")),
            Token::Punct(punct) => write!(f, "`{}`", punct.as_str()),
            Token::Lit(lit) => fmt::Display::fmt(lit, f),
            Token::Invalid(message) => f.write_str(message),
        }
    }
}
