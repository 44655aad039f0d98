use std::fmt::Display;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Ident {
    name: String,

    /// Written between back-quotes; never matches a keyword
    quoted: bool,
}

impl Ident {
    pub(crate) fn new(name: String) -> Ident {
        Ident {
            name,
            quoted: false,
        }
    }

    pub(crate) fn quoted(name: String) -> Ident {
        Ident { name, quoted: true }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_string(self) -> String {
        self.name
    }

    /// Keywords match case-insensitively and only when unquoted.
    pub(crate) fn is_keyword(&self, keyword: &str) -> bool {
        !self.quoted && self.name.eq_ignore_ascii_case(keyword)
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Parse for Ident {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match p.peek::<Ident>() {
            Some(ident) => {
                p.next_token();
                Ok(ident)
            }
            None => Err(p.unexpected("an identifier")),
        }
    }
}

impl Peek for Ident {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Ident(ident)) => Some(ident.clone()),
            _ => None,
        }
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        self.name.as_ref()
    }
}
