//! Forward-only cursor over an argument token vector.

/// Read position over an immutable token slice.
///
/// The schema translator walks field definitions strictly left to right;
/// every look-ahead goes through [`peek`](Self::peek) and every consumption
/// through [`advance`](Self::advance), so there is exactly one place where
/// the position moves.
///
/// # Examples
///
/// ```
/// use fastdb_core::TokenCursor;
///
/// let tokens: Vec<String> = vec!["--int".into(), "id".into()];
/// let mut cursor = TokenCursor::new(&tokens);
/// assert_eq!(cursor.peek(), Some("--int"));
/// assert_eq!(cursor.advance(), Some("--int"));
/// assert_eq!(cursor.advance(), Some("id"));
/// assert!(cursor.is_at_end());
/// assert_eq!(cursor.advance(), None);
/// ```
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token only when `pred` accepts it.
    pub fn advance_if(&mut self, pred: impl FnOnce(&str) -> bool) -> Option<&'a str> {
        match self.peek() {
            Some(token) if pred(token) => self.advance(),
            _ => None,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Index of the next token to be read.
    pub fn position(&self) -> usize {
        self.pos
    }
}
