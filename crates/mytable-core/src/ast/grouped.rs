use super::*;

use std::ops::Deref;

macro_rules! grouped {
    ($(#[$meta:meta])* $name:ident { $open:ty, $close:ty }) => {

        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub(crate) struct $name<T> {
            pub items: Vec<T>,
        }

        impl<T> $name<T> {
            pub fn into_vec(self) -> Vec<T> {
                self.items
            }
        }

        impl<T> Deref for $name<T> {
            type Target = [T];

            fn deref(&self) -> &[T] {
                &self.items
            }
        }

        impl<T: Parse> Parse for $name<T> {
            fn parse(p: &mut Parser<'_>) -> Result<Self> {
                p.parse::<$open>()?;

                let mut items = vec![];

                // A trailing comma before the closing delimiter is tolerated.
                while !p.is_next::<$close>() {
                    items.push(p.parse()?);

                    if p.parse::<Option<Comma>>()?.is_none() {
                        break;
                    }
                }

                p.parse::<$close>()?;

                Ok(Self { items })
            }
        }

        impl<T: Parse> Peek for $name<T> {
            fn from_token(token: Option<&Token>) -> Option<Self> {
                <$open>::from_token(token).map(|_| Self { items: vec![] })
            }
        }
    }
}

grouped! {
    /// Comma separated items between `(` and `)`.
    Parenthesized { LParen, RParen }
}

grouped! {
    /// Comma separated items between `<` and `>`.
    AngleBracketed { Lt, Gt }
}
