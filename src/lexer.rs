use crate::{
    ast::{Token, TokenKind},
    error::LexError,
};

/// Tokenizer for zone specifications.
///
/// Tokens are produced lazily, one at a time. Apart from the input, the lexer
/// keeps only the most recent token and at most one pushed-back character.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    /// 1-based column of the most recently read character.
    column: usize,
    pushback: Option<char>,
    current: Option<Token>,
    end: Option<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            column: 0,
            pushback: None,
            current: None,
            end: None,
        }
    }

    /// Return the most recently produced token, reading the first one if
    /// nothing has been read yet.
    pub fn current_token(&mut self) -> Result<&Token, LexError> {
        if self.current.is_none() {
            self.next_token()?;
        }
        // Set by next_token above
        Ok(&*self.current.get_or_insert_with(|| Token::new(TokenKind::End, 1)))
    }

    /// Advance to the next token and return it.
    ///
    /// Once the end of input is reached every further call returns the same
    /// `End` token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = self.read_token()?;
        self.current = Some(token.clone());
        Ok(token)
    }

    fn next_char(&mut self) -> Option<char> {
        self.column += 1;
        if let Some(ch) = self.pushback.take() {
            return Some(ch);
        }
        let ch = self.input.get(self.position).copied();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    /// Un-read one character. Pushing back end of input only rewinds the
    /// column.
    fn unread_char(&mut self, ch: Option<char>) {
        debug_assert!(self.pushback.is_none(), "only one character of pushback");
        if ch.is_some() {
            self.pushback = ch;
        }
        self.column -= 1;
    }

    fn read_token(&mut self) -> Result<Token, LexError> {
        if let Some(end) = &self.end {
            return Ok(end.clone());
        }

        let mut ch = self.next_char();
        while ch.is_some_and(|c| c.is_ascii_whitespace()) {
            ch = self.next_char();
        }

        let column = self.column;
        let kind = match ch {
            Some('(') => TokenKind::LParen,
            Some(')') => TokenKind::RParen,
            Some(',') => TokenKind::Comma,
            Some('&') => TokenKind::And,
            Some('|') => TokenKind::Or,
            Some('^') => TokenKind::Xor,
            Some('!') => TokenKind::Not,
            None => {
                let end = Token::new(TokenKind::End, column);
                self.end = Some(end.clone());
                return Ok(end);
            }
            Some(c) if c.is_alphabetic() => return Ok(self.read_identifier(c)),
            Some('"') => return self.read_string(),
            Some(c) if c == '+' || c == '-' || c.is_ascii_digit() => return self.read_number(c),
            Some(c) => {
                return Err(LexError::new(
                    format!("unexpected character: '{}'", c),
                    column,
                ));
            }
        };
        Ok(Token::new(kind, column))
    }

    fn read_identifier(&mut self, first: char) -> Token {
        let column = self.column;
        let mut ident = String::new();
        let mut ch = Some(first);
        while let Some(c) = ch.filter(|c| c.is_alphabetic()) {
            ident.push(c);
            ch = self.next_char();
        }
        self.unread_char(ch);
        Token::with_text(TokenKind::Ident, ident, column)
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let column = self.column;
        let mut text = String::new();
        loop {
            match self.next_char() {
                Some('"') => return Ok(Token::with_text(TokenKind::String, text, column)),
                Some(c) => text.push(c),
                None => return Err(LexError::new("unterminated string", self.column)),
            }
        }
    }

    fn read_number(&mut self, first: char) -> Result<Token, LexError> {
        let column = self.column;
        let mut number = String::new();
        let mut ch = Some(first);

        let signed = match first {
            '+' => true,
            '-' => {
                number.push('-');
                true
            }
            _ => false,
        };
        if signed {
            ch = self.next_char();
            if !ch.is_some_and(|c| c.is_ascii_digit()) {
                return Err(LexError::new(
                    "number has more than one sign indicator",
                    self.column,
                ));
            }
        }

        // At most one zero may come before the first non-zero digit.
        let mut leading_zeroes = Some(0);
        while let Some(c) = ch.filter(|c| c.is_ascii_digit()) {
            if c == '0' {
                if let Some(count) = leading_zeroes.as_mut() {
                    *count += 1;
                    if *count > 1 {
                        return Err(LexError::new(
                            "number has too many leading zeroes",
                            self.column,
                        ));
                    }
                }
            } else {
                leading_zeroes = None;
            }
            number.push(c);
            ch = self.next_char();
        }

        // The fraction may be empty: `10.` is the number 10
        if ch == Some('.') {
            number.push('.');
            ch = self.next_char();
            while let Some(c) = ch.filter(|c| c.is_ascii_digit()) {
                number.push(c);
                ch = self.next_char();
            }
        }

        self.unread_char(ch);
        Ok(Token::with_text(TokenKind::Number, number, column))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, `End`; stops after an error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_some() {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is(TokenKind::End) => None,
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.end = Some(Token::new(TokenKind::End, e.column));
                Some(Err(e))
            }
        }
    }
}
