use super::*;

macro_rules! punct {
    ( $( $s:literal => $i:ident ;)* ) => {
        $(
            #[derive(Debug, Clone, PartialEq)]
            pub(crate) struct $i;

            impl Parse for $i {
                fn parse(p: &mut Parser<'_>) -> Result<$i> {
                    match p.peek::<$i>() {
                        Some(punct) => {
                            p.next_token();
                            Ok(punct)
                        }
                        None => Err(p.unexpected(concat!("`", $s, "`"))),
                    }
                }
            }

            impl Peek for $i {
                fn from_token(token: Option<&Token>) -> Option<Self> {
                    match token {
                        Some(Token::Punct(Punct::$i(punct))) => Some(punct.clone()),
                        _ => None,
                    }
                }
            }

            impl From<$i> for Token {
                fn from(src: $i) -> Token {
                    Token::Punct(Punct::$i(src))
                }
            }
        )*

        #[derive(Debug, Clone)]
        pub(crate) enum Punct {
            $(
                $i($i),
            )*
        }

        impl Punct {
            pub(crate) fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Punct::$i(_) => $s,
                    )*
                }
            }
        }
    }
}

punct! {
    ";" => SemiColon;
    "," => Comma;
    "." => Period;
    "=" => Eq;
    "<" => Lt;
    ">" => Gt;
    "(" => LParen;
    ")" => RParen;
}
