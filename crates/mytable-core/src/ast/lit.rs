use super::*;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Lit {
    Str(LitStr),
    Number(LitNumber),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LitStr {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LitNumber {
    pub value: String,
}

impl LitStr {
    pub(crate) fn new(value: String) -> LitStr {
        LitStr { value }
    }
}

impl LitNumber {
    pub(crate) fn new(value: String) -> LitNumber {
        LitNumber { value }
    }

    pub(crate) fn as_u32(&self) -> Option<u32> {
        self.value.parse().ok()
    }
}

impl From<LitStr> for Token {
    fn from(src: LitStr) -> Token {
        Token::Lit(Lit::Str(src))
    }
}

impl From<LitNumber> for Token {
    fn from(src: LitNumber) -> Token {
        Token::Lit(Lit::Number(src))
    }
}

impl Parse for Lit {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match p.peek::<Lit>() {
            Some(lit) => {
                p.next_token();
                Ok(lit)
            }
            None => Err(p.unexpected("a literal")),
        }
    }
}

impl Peek for Lit {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Lit(lit)) => Some(lit.clone()),
            _ => None,
        }
    }
}

impl Parse for LitStr {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match p.peek::<LitStr>() {
            Some(lit) => {
                p.next_token();
                Ok(lit)
            }
            None => Err(p.unexpected("a string literal")),
        }
    }
}

impl Peek for LitStr {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Lit(Lit::Str(lit))) => Some(lit.clone()),
            _ => None,
        }
    }
}

impl Parse for LitNumber {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match p.peek::<LitNumber>() {
            Some(lit) => {
                p.next_token();
                Ok(lit)
            }
            None => Err(p.unexpected("a number")),
        }
    }
}

impl Peek for LitNumber {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Lit(Lit::Number(lit))) => Some(lit.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Str(lit) => write!(f, "'{}'", lit.value.replace('\'', "''")),
            Lit::Number(lit) => f.write_str(&lit.value),
        }
    }
}
