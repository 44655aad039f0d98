use super::*;

pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,

    /// When false, only standard SQL is accepted
    extensions: bool,

    /// Index of the statement being parsed
    statement: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(lexer: Lexer<'a>, extensions: bool) -> Parser<'a> {
        Parser {
            lexer,
            extensions,
            statement: 0,
        }
    }

    pub(crate) fn parse<T: Parse>(&mut self) -> Result<T> {
        T::parse(self)
    }

    pub(crate) fn parse_repeated_until<T: Parse, U: Peek>(&mut self) -> Result<Vec<T>> {
        let mut ret = vec![];

        while !self.is_next::<U>() {
            ret.push(self.parse()?);
        }

        Ok(ret)
    }

    pub(crate) fn is_next<T: Peek>(&mut self) -> bool {
        self.is_nth::<T>(0)
    }

    pub(crate) fn is_nth<T: Peek>(&mut self, n: usize) -> bool {
        T::is_next(self.lexer.peek_nth(n))
    }

    pub(crate) fn peek<T: Peek>(&mut self) -> Option<T> {
        self.peek_nth(0)
    }

    pub(crate) fn peek_nth<T: Peek>(&mut self, n: usize) -> Option<T> {
        T::from_token(self.lexer.peek_nth(n))
    }

    pub(crate) fn next_token(&mut self) -> Option<Token> {
        self.lexer.next()
    }

    pub(crate) fn is_eof(&mut self) -> bool {
        self.lexer.peek_nth(0).is_none()
    }

    /// Position of the next token.
    pub(crate) fn pos(&mut self) -> Pos {
        self.lexer.pos_nth(0)
    }

    pub(crate) fn statement(&self) -> usize {
        self.statement
    }

    pub(crate) fn next_statement(&mut self) {
        self.statement += 1;
    }

    pub(crate) fn extensions(&self) -> bool {
        self.extensions
    }

    /// Builds a syntax error located at the next token.
    pub(crate) fn error(&mut self, message: impl Into<String>) -> crate::Error {
        let pos = self.pos();
        self.error_at(pos, message)
    }

    pub(crate) fn error_at(&self, pos: Pos, message: impl Into<String>) -> crate::Error {
        crate::Error::syntax(vec![Diagnostic::new(
            self.statement,
            pos.line,
            pos.column,
            message,
        )])
    }

    /// Builds a syntax error describing what was expected and what was found.
    pub(crate) fn unexpected(&mut self, expected: &str) -> crate::Error {
        let found = match self.lexer.peek_nth(0) {
            Some(Token::Invalid(message)) => message.clone(),
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        };
        self.error(format!("expected {expected}, found {found}"))
    }

    /// Fails when `what` is a dialect extension and extensions are disabled.
    pub(crate) fn extension(&mut self, what: &str) -> Result<()> {
        if self.extensions {
            Ok(())
        } else {
            Err(self.error(format!("{what} is not standard SQL")))
        }
    }

    /// Skips the rest of a statement, through the next `;` outside of
    /// parentheses.
    pub(crate) fn skip_statement(&mut self) {
        let mut depth = 0usize;

        while let Some(token) = self.next_token() {
            match token {
                Token::Punct(Punct::LParen(_)) => depth += 1,
                Token::Punct(Punct::RParen(_)) => depth = depth.saturating_sub(1),
                Token::Punct(Punct::SemiColon(_)) if depth == 0 => return,
                _ => {}
            }
        }
    }

    /// Resynchronizes after a failed statement.
    pub(crate) fn recover(&mut self) {
        self.skip_statement();
    }
}
