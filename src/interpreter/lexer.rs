use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::str::Chars;
use thiserror::Error;
use crate::interpreter::logger::Logger;
use crate::util;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPos {
    pub line: i32,
    pub column: i32,
}

impl TokenPos {
    pub fn new(line: i32, column: i32) -> TokenPos {
        TokenPos { line, column }
    }

    pub fn begin() -> TokenPos {
        TokenPos::new(1, 1)
    }
}

impl Display for TokenPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {} column {}]", self.line, self.column)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenType {
    ParenthesisLeft, ParenthesisRight,

    Number,
    String,
    Identifier,

    Eof,
}

/// Payload carried by number, string and identifier tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Number(i64),
    String(String),
    Identifier(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "\"{}\"", value),
            Literal::Identifier(name) => f.write_str(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    literal: Option<Literal>,
    start: TokenPos,
}

impl Token {
    pub fn new(token_type: TokenType, literal: Option<Literal>, start: TokenPos) -> Token {
        Token {
            token_type, literal,
            start,
        }
    }

    pub fn token_type(&self) -> TokenType { self.token_type }
    pub fn literal(&self) -> Option<&Literal> { self.literal.as_ref() }
    pub fn start(&self) -> &TokenPos { &self.start }

    pub fn line(&self) -> i32 { self.start.line }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.token_type, &self.literal) {
            (TokenType::ParenthesisLeft, _) => f.write_str("`(`"),
            (TokenType::ParenthesisRight, _) => f.write_str("`)`"),
            (TokenType::Eof, _) => f.write_str("Eof"),
            (_, Some(literal)) => write!(f, "`{}`", literal),
            (token_type, None) => write!(f, "{:?}", token_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    #[error("Unexpected EOF")]
    UnexpectedEof,

    #[error("{0} Unknown character '{1}'")]
    UnknownCharacter(TokenPos, char),
    #[error("{pos} Unterminated string")]
    UnterminatedString {
        pos: TokenPos,
    },
    #[error("{pos} Number literal '{literal}' is out of range")]
    NumberOutOfRange {
        pos: TokenPos,
        literal: String,
    },
}

impl LexerError {
    pub fn get_pos(&self) -> Option<TokenPos> {
        match self {
            LexerError::UnknownCharacter(pos, _) => Some(*pos),
            LexerError::UnterminatedString { pos } => Some(*pos),
            LexerError::NumberOutOfRange { pos, .. } => Some(*pos),
            LexerError::UnexpectedEof => None,
        }
    }
}

type LexerResult<T> = Result<T, LexerError>;

pub struct Lexer<'source> {
    input: &'source str,

    chars: Chars<'source>,
    peek_1: Option<char>,

    start_index: usize,
    current_index: usize,

    start_pos: TokenPos,
    current_pos: TokenPos,

    logger: Rc<dyn Logger>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str, logger: Rc<dyn Logger>) -> Lexer<'source> {
        Lexer {
            input: source,

            chars: source.chars(),
            peek_1: None,

            start_index: 0,
            current_index: 0,

            start_pos: TokenPos::begin(),
            current_pos: TokenPos::begin(),

            logger,
        }
    }

    /// Scans the whole input. Lexical errors are reported through the logger and
    /// produce no token; the returned sequence always ends with an `Eof` token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            match self.scan_token() {
                Ok(token) => {
                    tracing::trace!(%token, line = token.line(), "scanned token");
                    let eof = token.token_type() == TokenType::Eof;
                    tokens.push(token);

                    if eof {
                        break;
                    }
                },
                Err(err) => {
                    tracing::debug!(pos = ?err.get_pos(), "lexical error");
                    self.logger.error(&err.to_string());
                },
            }
        }

        tokens
    }

    pub fn scan_token(&mut self) -> LexerResult<Token> {
        self.skip_whitespace();
        self.start_index = self.current_index;
        self.start_pos = self.current_pos;

        if self.is_eof() {
            return Ok(self.make_token(TokenType::Eof, None));
        }

        let c = self.consume()?;

        match c {
            '(' => Ok(self.make_token(TokenType::ParenthesisLeft, None)),
            ')' => Ok(self.make_token(TokenType::ParenthesisRight, None)),

            '"' => self.scan_string(),
            c if util::is_numeric(c) => self.scan_number(),
            c if util::is_alphabetic(c) => self.scan_identifier(),

            _ => Err(LexerError::UnknownCharacter(self.start_pos, c)),
        }
    }

    fn scan_string(&mut self) -> LexerResult<Token> {
        while let Ok(c) = self.peek() {
            if c == '"' {
                break;
            }

            let _ = self.consume();
        }

        if self.is_eof() {
            Err(LexerError::UnterminatedString { pos: self.start_pos })
        } else {
            let _ = self.consume(); // the trailing '"'

            // Don't add leading and trailing '"' characters to token
            let value = self.input[(self.start_index + 1)..(self.current_index - 1)].to_owned();
            Ok(self.make_token(TokenType::String, Some(Literal::String(value))))
        }
    }

    fn scan_number(&mut self) -> LexerResult<Token> {
        while let Ok(c) = self.peek() {
            if !util::is_numeric(c) {
                break;
            }

            let _ = self.consume();
        }

        let source = &self.input[self.start_index..self.current_index];

        match source.parse::<i64>() {
            Ok(value) => Ok(self.make_token(TokenType::Number, Some(Literal::Number(value)))),
            Err(_) => Err(LexerError::NumberOutOfRange { pos: self.start_pos, literal: source.to_owned() }),
        }
    }

    fn scan_identifier(&mut self) -> LexerResult<Token> {
        while let Ok(c) = self.peek() {
            if !util::is_alphanumeric(c) {
                break;
            }

            let _ = self.consume();
        }

        let name = self.input[self.start_index..self.current_index].to_owned();
        Ok(self.make_token(TokenType::Identifier, Some(Literal::Identifier(name))))
    }

    fn make_token(&self, token_type: TokenType, literal: Option<Literal>) -> Token {
        Token {
            token_type, literal,
            start: self.start_pos,
        }
    }

    fn consume(&mut self) -> LexerResult<char> {
        (if let Some(c) = self.peek_1.take() {
            Ok(c)
        } else {
            self.chars.next().ok_or(LexerError::UnexpectedEof)
        }).map(|c| {
            self.current_index += c.len_utf8();

            if c == '\n' {
                self.current_pos.line += 1;
                self.current_pos.column = 1;
            } else {
                self.current_pos.column += 1;
            }

            c
        })
    }

    fn peek(&mut self) -> LexerResult<char> {
        if let Some(c) = self.peek_1 {
            Ok(c)
        } else if let Some(c) = self.chars.next() {
            self.peek_1 = Some(c);
            Ok(c)
        } else {
            Err(LexerError::UnexpectedEof)
        }
    }

    // Only ' ', '\r', '\t' and '\n' separate tokens; other whitespace is an unknown character
    fn skip_whitespace(&mut self) {
        while let Ok(c) = self.peek() {
            if !matches!(c, ' ' | '\r' | '\t' | '\n') {
                return;
            }

            let _ = self.consume();
        }
    }

    fn is_eof(&self) -> bool {
        self.current_index >= self.input.len()
    }
}
