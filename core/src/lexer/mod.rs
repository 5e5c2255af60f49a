//! file: core/src/lexer/mod.rs
//! description: turns PAL source text into the classified token stream.
//!
//! The lexer is a collaborator of the grammar engine, not part of it: the
//! engine accepts any `Vec<Token>`. Lexing never fails; characters that do
//! not start a valid token become `TokenKind::Invalid` tokens and are left
//! for the grammar engine to report.
//!
use pest::Parser;
use pest::error::LineColLocation;
use pest_derive::Parser;

use crate::location::Location;

pub mod token;

pub use token::{Keyword, Punct, Token, TokenKind};

#[derive(Parser)]
#[grammar = "lexer/pal.pest"]
struct PalLexer;

fn location_from_pair(pair: &pest::iterators::Pair<Rule>) -> Location {
    let (line, column) = pair.as_span().start_pos().line_col();
    Location::new(line, column)
}

/// Split `source` into tokens. The returned stream always ends with exactly
/// one `EndOfFile` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut pairs = match PalLexer::parse(Rule::tokens, source) {
        Ok(pairs) => pairs,
        Err(e) => {
            // `invalid` accepts any character, so this only happens on
            // malformed input pest itself rejects.
            let (line, column) = match e.line_col {
                LineColLocation::Pos(pos) => pos,
                LineColLocation::Span(start, _) => start,
            };
            log::warn!("lexer gave up at {}:{}: {}", line, column, e);
            let location = Location::new(line, column);
            return vec![
                Token::new(TokenKind::Invalid, "", location),
                Token::end_of_file(location),
            ];
        }
    };

    let mut tokens = Vec::new();
    let Some(root) = pairs.next() else {
        return vec![Token::end_of_file(Location::default())];
    };

    for pair in root.into_inner() {
        let location = location_from_pair(&pair);
        let text = pair.as_str();
        let token = match pair.as_rule() {
            Rule::word => match Keyword::from_word(text) {
                Some(kw) => Token::keyword(kw, location),
                None => Token::identifier(text, location),
            },
            Rule::integer => Token::new(TokenKind::IntegerLiteral, text, location),
            Rule::real => Token::new(TokenKind::RealLiteral, text, location),
            Rule::string => Token::new(
                TokenKind::StringLiteral,
                text.trim_matches('"'),
                location,
            ),
            Rule::punct => match Punct::from_symbol(text) {
                Some(p) => Token::punct(p, location),
                None => Token::new(TokenKind::Invalid, text, location),
            },
            Rule::EOI => Token::end_of_file(location),
            _ => Token::new(TokenKind::Invalid, text, location),
        };
        tokens.push(token);
    }

    if !tokens.last().is_some_and(|t| t.is(TokenKind::EndOfFile)) {
        let location = tokens.last().map(|t| t.location).unwrap_or_default();
        tokens.push(Token::end_of_file(location));
    }

    log::debug!("lexed {} tokens", tokens.len());
    tokens
}
