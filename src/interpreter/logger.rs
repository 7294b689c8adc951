use std::cell::{Cell, RefCell};
use crate::interpreter::value::Value;

/// Output sink handed to the lexer, parser and evaluator by the host.
pub trait Logger {
    /// Ordinary output. Multi-values are displayed joined by single spaces.
    fn log(&self, value: &Value);

    /// Diagnostic output.
    fn error(&self, message: &str);
}

/// Writes output to stdout and diagnostics to stderr.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    error_count: Cell<usize>,
}

impl ConsoleLogger {
    pub fn new() -> ConsoleLogger {
        ConsoleLogger::default()
    }

    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, value: &Value) {
        println!("{}", value);
    }

    fn error(&self, message: &str) {
        self.error_count.set(self.error_count.get() + 1);
        eprintln!("Error: {}", message);
    }
}

/// Keeps everything in memory, in emission order.
#[derive(Debug, Default)]
pub struct CapturingLogger {
    output: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl CapturingLogger {
    pub fn new() -> CapturingLogger {
        CapturingLogger::default()
    }

    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Logger for CapturingLogger {
    fn log(&self, value: &Value) {
        self.output.borrow_mut().push(value.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}
