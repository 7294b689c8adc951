pub mod ast;
pub mod lexer;
pub mod parser;
pub mod value;
pub mod environment;
pub mod logger;
pub mod evaluator;

use std::rc::Rc;
use crate::interpreter::ast::Expr;
use crate::interpreter::environment::Environment;
use crate::interpreter::evaluator::Evaluator;
use crate::interpreter::lexer::{Lexer, Token};
use crate::interpreter::logger::Logger;
use crate::interpreter::parser::Parser;
use crate::interpreter::value::Value;

/// Runs sources through lexer, parser and evaluator, keeping one environment
/// for every source it is given.
pub struct Session {
    evaluator: Evaluator,
    logger: Rc<dyn Logger>,
}

impl Session {
    pub fn new(logger: Rc<dyn Logger>) -> Session {
        Session {
            evaluator: Evaluator::new(Rc::clone(&logger)),
            logger,
        }
    }

    pub fn tokens(&self, source: &str) -> Vec<Token> {
        Lexer::new(source, Rc::clone(&self.logger)).scan_tokens()
    }

    pub fn parse(&self, source: &str) -> Vec<Expr> {
        let tokens = self.tokens(source);
        Parser::new(tokens, Rc::clone(&self.logger)).parse_program()
    }

    /// Evaluates every top-level form of `source` in order and returns their results.
    /// Each form is evaluated before the next one is parsed.
    pub fn run(&mut self, source: &str) -> Vec<Value> {
        let tokens = self.tokens(source);
        let mut parser = Parser::new(tokens, Rc::clone(&self.logger));
        let mut results = Vec::new();

        while let Some(form) = parser.parse_next() {
            results.push(self.evaluator.evaluate(&form));
        }

        results
    }

    pub fn environment(&self) -> &Environment {
        self.evaluator.environment()
    }
}
