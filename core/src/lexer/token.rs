//! Classified tokens consumed by the grammar engine.
//!
//! A `Token` is produced once by the lexer and never changes afterwards. The
//! `TokenKind` doubles as a match pattern: category kinds such as
//! `Identifier` match any identifier, while `Keyword(..)` and `Punct(..)`
//! match one exact terminal.

use std::fmt;

use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Program,
    With,
    In,
    End,
    As,
    Real,
    Integer,
    Until,
    Repeat,
    EndLoop,
    If,
    Then,
    Else,
    EndIf,
    Input,
    Output,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Program => "PROGRAM",
            Keyword::With => "WITH",
            Keyword::In => "IN",
            Keyword::End => "END",
            Keyword::As => "AS",
            Keyword::Real => "REAL",
            Keyword::Integer => "INTEGER",
            Keyword::Until => "UNTIL",
            Keyword::Repeat => "REPEAT",
            Keyword::EndLoop => "ENDLOOP",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::EndIf => "ENDIF",
            Keyword::Input => "INPUT",
            Keyword::Output => "OUTPUT",
        }
    }

    /// Keywords are case-sensitive.
    pub fn from_word(word: &str) -> Option<Self> {
        let kw = match word {
            "PROGRAM" => Keyword::Program,
            "WITH" => Keyword::With,
            "IN" => Keyword::In,
            "END" => Keyword::End,
            "AS" => Keyword::As,
            "REAL" => Keyword::Real,
            "INTEGER" => Keyword::Integer,
            "UNTIL" => Keyword::Until,
            "REPEAT" => Keyword::Repeat,
            "ENDLOOP" => Keyword::EndLoop,
            "IF" => Keyword::If,
            "THEN" => Keyword::Then,
            "ELSE" => Keyword::Else,
            "ENDIF" => Keyword::EndIf,
            "INPUT" => Keyword::Input,
            "OUTPUT" => Keyword::Output,
            _ => return None,
        };
        Some(kw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    Comma,    // ,
    Equals,   // =
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Less,     // <
    Greater,  // >
    LParen,   // (
    RParen,   // )
}

impl Punct {
    pub fn as_str(&self) -> &'static str {
        match self {
            Punct::Comma => ",",
            Punct::Equals => "=",
            Punct::Plus => "+",
            Punct::Minus => "-",
            Punct::Star => "*",
            Punct::Slash => "/",
            Punct::Less => "<",
            Punct::Greater => ">",
            Punct::LParen => "(",
            Punct::RParen => ")",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let p = match symbol {
            "," => Punct::Comma,
            "=" => Punct::Equals,
            "+" => Punct::Plus,
            "-" => Punct::Minus,
            "*" => Punct::Star,
            "/" => Punct::Slash,
            "<" => Punct::Less,
            ">" => Punct::Greater,
            "(" => Punct::LParen,
            ")" => Punct::RParen,
            _ => return None,
        };
        Some(p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    RealLiteral,
    BooleanLiteral,
    StringLiteral,
    Keyword(Keyword),
    Punct(Punct),
    /// A character the lexer could not classify.
    Invalid,
    EndOfFile,
}

impl TokenKind {
    pub const fn kw(keyword: Keyword) -> Self {
        TokenKind::Keyword(keyword)
    }

    pub const fn punct(punct: Punct) -> Self {
        TokenKind::Punct(punct)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntegerLiteral => write!(f, "integer literal"),
            TokenKind::RealLiteral => write!(f, "real literal"),
            TokenKind::BooleanLiteral => write!(f, "boolean literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::Keyword(kw) => write!(f, "{}", kw.as_str()),
            TokenKind::Punct(p) => write!(f, "'{}'", p.as_str()),
            TokenKind::Invalid => write!(f, "invalid token"),
            TokenKind::EndOfFile => write!(f, "end of file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            value: value.into(),
            location,
        }
    }

    pub fn identifier(name: &str, location: Location) -> Self {
        Token::new(TokenKind::Identifier, name, location)
    }

    pub fn keyword(keyword: Keyword, location: Location) -> Self {
        Token::new(TokenKind::Keyword(keyword), keyword.as_str(), location)
    }

    pub fn punct(punct: Punct, location: Location) -> Self {
        Token::new(TokenKind::Punct(punct), punct.as_str(), location)
    }

    pub fn end_of_file(location: Location) -> Self {
        Token::new(TokenKind::EndOfFile, "", location)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => write!(f, "end of file"),
            _ => write!(f, "'{}'", self.value),
        }
    }
}
