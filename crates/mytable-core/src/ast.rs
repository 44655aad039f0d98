mod column;
pub(crate) use column::{Column, ColumnAttr};

mod create_table;
pub(crate) use create_table::{CreateTable, KeyPartSyntax, TableElement};

mod eof;
pub(crate) use eof::End;

mod grouped;
pub(crate) use grouped::*;

mod ident;
pub(crate) use ident::Ident;

pub(crate) mod keyword;
use keyword as kw;

mod lit;
pub(crate) use lit::{Lit, LitNumber, LitStr};

mod parse;
pub(crate) use parse::{from_str, Pos, Script};
use parse::{Parse, Parser, Peek, Result};

mod punct;
pub(crate) use punct::*;

mod statement;
pub(crate) use statement::Statement;

mod table_option;
pub(crate) use table_option::TableOption;

mod token;
pub(crate) use token::Token;

mod ty;
pub(crate) use ty::Type;

mod value;
