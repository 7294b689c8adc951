use std::rc::Rc;
use thiserror::Error;
use crate::interpreter::ast::Expr;
use crate::interpreter::lexer::{Literal, Token, TokenPos, TokenType};
use crate::interpreter::logger::Logger;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Left parenthesis not found")]
    LeftParenthesisNotFound,
    #[error("Unterminated list")]
    UnterminatedList,
    #[error("Expected left parenthesis, string, number, or identifier")]
    ExpectedExpression,
    #[error("Lists nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

/// Deepest list nesting the parser builds; deeper lists are replaced by an error node.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,

    logger: Rc<dyn Logger>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, logger: Rc<dyn Logger>) -> Parser {
        // Guarantees `peek` always has a token to look at
        if tokens.last().map(|token| token.token_type()) != Some(TokenType::Eof) {
            tokens.push(Token::new(TokenType::Eof, None, TokenPos::begin()));
        }

        Parser {
            tokens,
            current: 0,
            depth: 0,
            logger,
        }
    }

    /// Parses one parenthesized top-level form.
    pub fn parse(&mut self) -> Expr {
        if !self.matches(TokenType::ParenthesisLeft) {
            self.logger.error(&ParseError::LeftParenthesisNotFound.to_string());
        }

        let expr = self.parse_list_body();
        tracing::debug!(%expr, "parsed top-level form");
        expr
    }

    /// The next top-level form, or `None` once only the end of input is left.
    pub fn parse_next(&mut self) -> Option<Expr> {
        if self.is_eof() {
            None
        } else {
            Some(self.parse())
        }
    }

    /// Parses top-level forms until the end of input.
    pub fn parse_program(&mut self) -> Vec<Expr> {
        let mut forms = Vec::new();

        while let Some(form) = self.parse_next() {
            forms.push(form);
        }

        forms
    }

    fn parse_expression(&mut self) -> Expr {
        if self.matches(TokenType::ParenthesisLeft) {
            return self.parse_list_body();
        }

        let token = self.peek().clone();

        let expr = match (token.token_type(), token.literal()) {
            (TokenType::String, Some(Literal::String(value))) => Expr::StringLiteral(value.clone()),
            (TokenType::Number, Some(Literal::Number(value))) => Expr::NumberLiteral(*value),
            (TokenType::Identifier, Some(Literal::Identifier(name))) => Expr::Identifier(name.clone()),
            _ => {
                tracing::debug!(%token, line = token.line(), "expected expression");
                return Expr::Error(ParseError::ExpectedExpression.to_string());
            },
        };

        self.consume();
        expr
    }

    fn parse_list_body(&mut self) -> Expr {
        if self.depth >= MAX_NESTING_DEPTH {
            self.skip_list_body();
            return Expr::Error(ParseError::NestingTooDeep(MAX_NESTING_DEPTH).to_string());
        }

        self.depth += 1;
        let list = self.parse_list_elements();
        self.depth -= 1;

        list
    }

    fn parse_list_elements(&mut self) -> Expr {
        let mut elements = Vec::new();

        while !self.check(TokenType::ParenthesisRight) && !self.is_eof() {
            let start = self.current;
            elements.push(self.parse_expression());

            // An expression that consumed nothing can't be retried
            if self.current == start {
                self.consume();
            }
        }

        if !self.matches(TokenType::ParenthesisRight) {
            return Expr::Error(ParseError::UnterminatedList.to_string());
        }

        Expr::List(elements)
    }

    // Drops everything up to and including the `)` closing the current list
    fn skip_list_body(&mut self) {
        let mut open = 1usize;

        while !self.is_eof() {
            match self.peek().token_type() {
                TokenType::ParenthesisLeft => open += 1,
                TokenType::ParenthesisRight => open -= 1,
                _ => {},
            }

            self.consume();

            if open == 0 {
                return;
            }
        }
    }

    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.current.min(last)]
    }

    fn consume(&mut self) {
        if !self.is_eof() {
            self.current += 1;
        }
    }

    fn matches(&mut self, token_type: TokenType) -> bool { // Should be called "match", but that's a keyword
        if !self.check(token_type) {
            return false;
        }

        self.consume();
        true
    }

    #[inline]
    fn check(&self, token_type: TokenType) -> bool {
        self.peek().token_type() == token_type
    }

    fn is_eof(&self) -> bool {
        self.peek().token_type() == TokenType::Eof
    }
}
