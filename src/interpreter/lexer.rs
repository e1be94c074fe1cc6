use logos::Logos;

/// Represents a lexical token of an expression.
///
/// The evaluator splits a line on spaces itself; this lexer then decides what
/// a single field is. A field is only recognised when the whole of it lexes as
/// exactly one token, see [`Token::whole`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Decimal literal tokens, such as `7` or `042`.
    #[regex(r"[0-9]+", parse_integer)]
    Arabic(i64),
    /// Roman literal tokens, such as `XIV`. Only the alphabet is checked here.
    #[regex(r"[IVXLCDM]+", |lex| lex.slice().to_string())]
    Roman(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

impl Token {
    /// Lexes `field` and returns its token if the field is exactly one token.
    ///
    /// Fields holding several tokens (`+5`, `X1`), unknown characters, or
    /// integers too large for `i64` yield `None`.
    ///
    /// # Example
    /// ```
    /// use numerus::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::whole("12"), Some(Token::Arabic(12)));
    /// assert_eq!(Token::whole("XII"), Some(Token::Roman("XII".to_string())));
    /// assert_eq!(Token::whole("*"), Some(Token::Star));
    /// assert_eq!(Token::whole("-3"), None);
    /// assert_eq!(Token::whole("xii"), None);
    /// ```
    #[must_use]
    pub fn whole(field: &str) -> Option<Self> {
        let mut lexer = Self::lexer(field);
        let token = lexer.next()?.ok()?;
        if lexer.span().end != field.len() || lexer.next().is_some() {
            return None;
        }
        Some(token)
    }
}

/// Parses a decimal literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
