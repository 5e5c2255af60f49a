use crate::lexer::{Token, TokenKind};
use crate::location::Location;

/// Forward-only cursor over a token stream with one token of lookahead.
///
/// The stream always ends with an `EndOfFile` token; the cursor never moves
/// past it, so every loop driven by the cursor terminates.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::EndOfFile)) {
            let location = tokens.last().map(|t| t.location).unwrap_or_default();
            tokens.push(Token::end_of_file(location));
        }
        TokenCursor { tokens, pos: 0 }
    }

    /// The current token, not consumed.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// The token after the current one; `EndOfFile` once input runs out.
    pub fn peek_next(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + 1).min(last)]
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    pub fn is_at_end(&self) -> bool {
        self.at(TokenKind::EndOfFile)
    }

    pub fn location(&self) -> Location {
        self.peek().location
    }

    /// Consume and return the current token. At end of input the
    /// `EndOfFile` token is returned again and the cursor stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Skip tokens until the current one is in `stop` or input is exhausted.
    /// Returns how many tokens were skipped.
    pub fn skip_until(&mut self, stop: &[TokenKind]) -> usize {
        let mut skipped = 0;
        while !self.is_at_end() && !self.at_any(stop) {
            self.advance();
            skipped += 1;
        }
        skipped
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Keyword, Punct, tokenize};

    #[test]
    fn end_of_file_is_appended_when_missing() {
        let cursor = TokenCursor::new(vec![]);
        assert!(cursor.is_at_end());

        let mut cursor = TokenCursor::new(vec![Token::identifier("x", Location::new(1, 1))]);
        assert_eq!(cursor.advance().value, "x");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn advance_stops_at_end_of_file() {
        let mut cursor = TokenCursor::new(tokenize("x"));
        cursor.advance();
        let eof = cursor.advance();
        assert_eq!(eof.kind, TokenKind::EndOfFile);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn peek_next_looks_one_token_ahead() {
        let mut cursor = TokenCursor::new(tokenize("a ="));
        assert!(cursor.peek_next().is(TokenKind::punct(Punct::Equals)));
        cursor.advance();
        assert!(cursor.peek_next().is(TokenKind::EndOfFile));
        cursor.advance();
        assert!(cursor.peek_next().is(TokenKind::EndOfFile));
    }

    #[test]
    fn skip_until_stops_on_first_sync_token() {
        let mut cursor = TokenCursor::new(tokenize("1 + * ENDIF y"));
        let skipped = cursor.skip_until(&[
            TokenKind::kw(Keyword::EndIf),
            TokenKind::punct(Punct::RParen),
        ]);
        assert_eq!(skipped, 3);
        assert!(cursor.at(TokenKind::kw(Keyword::EndIf)));
    }

    #[test]
    fn skip_until_gives_up_at_end_of_input() {
        let mut cursor = TokenCursor::new(tokenize("a b c"));
        assert_eq!(cursor.skip_until(&[TokenKind::kw(Keyword::End)]), 3);
        assert!(cursor.is_at_end());
    }
}
