use std::fmt;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Left parenthesis, for grouping or opening an argument list
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma separating call arguments
    Comma,

    /// Intersection of two regions
    ///
    /// # Examples
    /// ```text
    /// biome("DESERT") & circle(0, 0, 500)
    /// ```
    And,

    /// Union of two regions
    ///
    /// # Examples
    /// ```text
    /// circle(1000, 1000, 200) | circle(500, -500, 200)
    /// ```
    Or,

    /// Symmetric difference of two regions
    ///
    /// # Examples
    /// ```text
    /// circle(0, 0, 100) ^ rect(-50, -50, 50, 50)
    /// ```
    Xor,

    /// Complement of a region
    ///
    /// # Examples
    /// ```text
    /// !world("world_nether")
    /// ```
    Not,

    /// Predicate name: a maximal run of letters
    ///
    /// # Examples
    /// ```text
    /// biome
    /// circle
    /// ```
    Ident,

    /// String literal enclosed in double quotes, taken verbatim
    ///
    /// # Examples
    /// ```text
    /// "END_BARRENS"
    /// "C:\worlds"
    /// ```
    String,

    /// Integer or decimal literal with an optional sign
    ///
    /// # Examples
    /// ```text
    /// 200
    /// -500
    /// 0.25
    /// ```
    Number,

    /// End of input
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::And => "'&'",
            TokenKind::Or => "'|'",
            TokenKind::Xor => "'^'",
            TokenKind::Not => "'!'",
            TokenKind::Ident => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::End => "end of input",
        };
        f.write_str(s)
    }
}

/// A token produced by the [`Lexer`](crate::lexer::Lexer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// Literal text for `Ident`, `String` and `Number` tokens.
    ///
    /// String tokens hold the text between the quotes; number tokens hold
    /// the digits with a leading `-` if negative (a `+` sign is dropped).
    pub text: Option<String>,

    /// 1-based column of the first character of the token.
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, column: usize) -> Self {
        Token {
            kind,
            text: None,
            column,
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>, column: usize) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            column,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.text) {
            (TokenKind::Ident, Some(text)) => write!(f, "identifier '{}'", text),
            (TokenKind::String, Some(text)) => write!(f, "string \"{}\"", text),
            (TokenKind::Number, Some(text)) => write!(f, "number {}", text),
            (kind, _) => write!(f, "{}", kind),
        }
    }
}
