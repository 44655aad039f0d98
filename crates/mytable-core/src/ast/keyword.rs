use super::*;

macro_rules! define_keyword {
    ( $( $l:literal => $i:ident; )* ) => {
        $(
            #[derive(Debug)]
            pub(crate) struct $i;

            impl Parse for $i {
                fn parse(parser: &mut Parser<'_>) -> Result<$i> {
                    match parser.peek::<$i>() {
                        Some(kw) => {
                            parser.next_token();
                            Ok(kw)
                        }
                        None => Err(parser.unexpected(concat!("`", $l, "`"))),
                    }
                }
            }

            impl Peek for $i {
                fn from_token(token: Option<&Token>) -> Option<Self> {
                    match token {
                        Some(Token::Ident(ident)) if ident.is_keyword($l) => Some(Self),
                        _ => None
                    }
                }
            }
        )*
    };
}

define_keyword! {
    "ACTION" => Action;
    "ASC" => Asc;
    "AUTO_INCREMENT" => AutoIncrement;
    "BEGIN" => Begin;
    "CASCADE" => Cascade;
    "CHARACTER" => Character;
    "CHARSET" => Charset;
    "COLLATE" => Collate;
    "COMMENT" => Comment;
    "COMMIT" => Commit;
    "CONSTRAINT" => Constraint;
    "CREATE" => Create;
    "DEFAULT" => Default;
    "DELETE" => Delete;
    "DESC" => Desc;
    "ENGINE" => Engine;
    "EXISTS" => Exists;
    "FALSE" => False;
    "FOREIGN" => Foreign;
    "IF" => If;
    "INDEX" => Index;
    "KEY" => Key;
    "NO" => No;
    "NOT" => Not;
    "NULL" => Null;
    "ON" => On;
    "PRECISION" => Precision;
    "PRIMARY" => Primary;
    "REFERENCES" => References;
    "RESTRICT" => Restrict;
    "SET" => Set;
    "SIGNED" => Signed;
    "START" => Start;
    "TABLE" => Table;
    "TEMPORARY" => Temporary;
    "TRUE" => True;
    "UNIQUE" => Unique;
    "UNSIGNED" => Unsigned;
    "UPDATE" => Update;
    "ZEROFILL" => Zerofill;

    // Container types
    "List" => List;
    "Map" => Map;
    "Object" => Object;
    "Any" => Any;

    // Directives
    "__assoc" => DirAssoc;
    "__lift" => DirLift;
    "__common_code" => DirCommonCode;
}
