use crate::ast::*;

use std::collections::VecDeque;

/// Line and column of a token, both one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pos {
    pub line: usize,
    pub column: usize,
}

pub(crate) struct Lexer<'a> {
    src: &'a str,
    next: VecDeque<(Token, Pos)>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Lexer<'a> {
        Lexer {
            src,
            next: VecDeque::new(),
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn next(&mut self) -> Option<Token> {
        self.lex_n(1);
        self.next.pop_front().map(|(token, _)| token)
    }

    pub(crate) fn peek_nth(&mut self, n: usize) -> Option<&Token> {
        self.lex_n(n + 1);
        self.next.get(n).map(|(token, _)| token)
    }

    /// Position of the nth buffered token, or of the end of input.
    pub(crate) fn pos_nth(&mut self, n: usize) -> Pos {
        self.lex_n(n + 1);
        match self.next.get(n) {
            Some((_, pos)) => *pos,
            None => self.pos(),
        }
    }

    fn pos(&self) -> Pos {
        Pos {
            line: self.line,
            column: self.column,
        }
    }

    fn lex_n(&mut self, n: usize) {
        while self.next.len() < n {
            self.skip_whitespace();

            let pos = self.pos();

            let Some(ch) = self.try_next_char() else {
                return;
            };

            let token = match ch {
                ';' => SemiColon.into(),
                ',' => Comma.into(),
                '.' => Period.into(),
                '(' => LParen.into(),
                ')' => RParen.into(),
                '=' => Eq.into(),
                '<' => Lt.into(),
                '>' => Gt.into(),
                '`' => self.lex_quoted_ident(),
                '\'' | '"' => self.lex_string(ch),
                '-' if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) => {
                    self.lex_number('-')
                }
                ch if ch.is_ascii_digit() => self.lex_number(ch),
                ch if ch.is_alphabetic() || ch == '_' => {
                    let mut ident = String::new();
                    ident.push(ch);

                    while let Some(ch) = self.take_if(ident_ch) {
                        ident.push(ch);
                    }

                    Token::Ident(Ident::new(ident))
                }
                ch => Token::Invalid(format!("unexpected character {ch:?}")),
            };

            self.next.push_back((token, pos));
        }
    }

    fn lex_quoted_ident(&mut self) -> Token {
        let mut ident = String::new();

        loop {
            match self.try_next_char() {
                Some('`') if self.peek_char() == Some('`') => {
                    self.consume(1);
                    ident.push('`');
                }
                Some('`') => return Token::Ident(Ident::quoted(ident)),
                Some(ch) => ident.push(ch),
                None => return Token::Invalid("unterminated quoted identifier".to_string()),
            }
        }
    }

    fn lex_string(&mut self, quote: char) -> Token {
        let mut s = String::new();

        loop {
            match self.try_next_char() {
                Some(ch) if ch == quote && self.peek_char() == Some(quote) => {
                    self.consume(1);
                    s.push(quote);
                }
                Some(ch) if ch == quote => return LitStr::new(s).into(),
                Some('\\') => match self.try_next_char() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('r') => s.push('\r'),
                    Some('0') => s.push('\0'),
                    Some(ch) => s.push(ch),
                    None => break,
                },
                Some(ch) => s.push(ch),
                None => break,
            }
        }

        Token::Invalid("unterminated string literal".to_string())
    }

    fn lex_number(&mut self, first: char) -> Token {
        let mut number = String::new();
        number.push(first);

        while let Some(ch) = self.take_if(|ch| ch.is_ascii_digit()) {
            number.push(ch);
        }

        if self.peek_char() == Some('.') && self.peek_char_n(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            self.consume(1);
            number.push('.');

            while let Some(ch) = self.take_if(|ch| ch.is_ascii_digit()) {
                number.push(ch);
            }
        }

        LitNumber::new(number).into()
    }

    fn try_next_char(&mut self) -> Option<char> {
        match self.src.chars().next() {
            Some(ch) => {
                self.consume(ch.len_utf8());
                Some(ch)
            }
            None => None,
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.peek_char_n(0)
    }

    fn peek_char_n(&mut self, n: usize) -> Option<char> {
        self.src.chars().nth(n)
    }

    fn take_if<P>(&mut self, predicate: P) -> Option<char>
    where
        P: FnOnce(char) -> bool,
    {
        match self.peek_char() {
            Some(ch) if predicate(ch) => {
                self.consume(ch.len_utf8());
                Some(ch)
            }
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '/' if self.peek_char_n(1) == Some('*') => {
                    self.consume(2);
                    self.skip_block_comment();
                }
                '-' if self.peek_char_n(1) == Some('-') => {
                    self.skip_line_comment();
                }
                // `#@@` hides a directive from plain SQL tools; the rest of
                // the line is tokenized.
                '#' if self.src.starts_with("#@@") => {
                    self.consume(3);
                }
                '#' => {
                    self.skip_line_comment();
                }
                ch if ch.is_whitespace() => {
                    self.consume(ch.len_utf8());
                }
                _ => return,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '*' => {
                    self.consume(1);

                    if self.peek_char() == Some('/') {
                        self.consume(1);
                        return;
                    }
                }
                _ => {
                    self.consume(ch.len_utf8());
                }
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                '\n' => {
                    self.consume(1);
                    return;
                }
                _ => self.consume(ch.len_utf8()),
            }
        }
    }

    fn consume(&mut self, amount: usize) {
        let (consumed, src) = self.src.split_at(amount);

        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.src = src;
    }
}

fn ident_ch(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphanumeric()
}
